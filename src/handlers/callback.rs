use std::sync::Arc;
use teloxide::prelude::*;

use crate::database::DatabasePool;
use crate::handlers::HandlerResult;
use crate::handlers::admin::user_key;
use crate::handlers::ui::{GENERIC_FAILURE, MenuTarget, present};
use crate::menu::{self, MenuId};

pub async fn menu_callback_handler(bot: Bot, q: CallbackQuery, db_pool: Arc<DatabasePool>) -> HandlerResult {
    let data = q.data.clone().unwrap_or_default();
    let user_id = user_key(q.from.id);
    log::info!("Received callback query with data: {}", data);

    bot.answer_callback_query(q.id.clone()).await?;

    let Some(message) = q.message.as_ref() else {
        log::warn!("Callback {:?} from {} has no message to edit", data, user_id);
        return Ok(());
    };
    let target = MenuTarget::Callback {
        chat_id: message.chat().id,
        message_id: message.id(),
    };

    if let Err(e) = db_pool.record_interaction(user_id, &data).await {
        log::error!("Failed to record callback {:?} from {}: {:#}", data, user_id, e);
        bot.send_message(target.chat_id(), GENERIC_FAILURE).await?;
        return Ok(());
    }

    if MenuId::from_callback(&data).is_none() {
        log::warn!("Unrecognized callback {:?} from {}", data, user_id);
    }

    if let Err(e) = present(&bot, target, &menu::resolve(&data)).await {
        log::error!("Failed to show menu {:?}: {}", data, e);
        bot.send_message(target.chat_id(), GENERIC_FAILURE).await?;
    }

    Ok(())
}
