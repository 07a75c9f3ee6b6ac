use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::admin_registry::AdminRegistry;
use crate::commands::Command;
use crate::database::DatabasePool;
use crate::handlers::HandlerResult;
use crate::handlers::admin::{ACCESS_DENIED, sender_key};
use crate::handlers::admin_panel::admin_panel_keyboard;
use crate::handlers::ui::{GENERIC_FAILURE, MenuTarget, get_main_reply_keyboard, present};
use crate::menu;
use crate::pending::{self, PendingDialogue};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db_pool: Arc<DatabasePool>,
    registry: Arc<AdminRegistry>,
    dialogue: PendingDialogue,
) -> HandlerResult {
    let Some(user_id) = sender_key(&msg) else {
        return Ok(());
    };

    // /cancel has to work while the store is down.
    if cmd == Command::Cancel {
        let text = if pending::cancel(&dialogue).await? {
            "❌ Pending action cancelled."
        } else {
            "Nothing to cancel."
        };
        bot.send_message(msg.chat.id, text).await?;

        if let Err(e) = db_pool.record_interaction(user_id, cmd.tag()).await {
            log::error!("Failed to record /{} from {}: {:#}", cmd.tag(), user_id, e);
        }
        return Ok(());
    }

    let recorded = async {
        if cmd == Command::Start {
            db_pool.upsert_user(user_id).await?;
        }
        db_pool.record_interaction(user_id, cmd.tag()).await
    }
    .await;

    if let Err(e) = recorded {
        log::error!("Failed to record /{} from {}: {:#}", cmd.tag(), user_id, e);
        bot.send_message(msg.chat.id, GENERIC_FAILURE).await?;
        return Ok(());
    }

    match cmd {
        Command::Start => {
            let first_name = msg.from.as_ref().map(|u| u.first_name.as_str()).unwrap_or("there");
            bot.send_message(
                msg.chat.id,
                format!("👋 Hi, {}! I am the partner assistant bot.", first_name),
            )
            .reply_markup(get_main_reply_keyboard())
            .await?;

            present(
                &bot,
                MenuTarget::NewMessage { chat_id: msg.chat.id },
                &menu::start_screen(),
            )
            .await?;
        }
        Command::Admin => {
            if !registry.is_privileged(user_id).await {
                bot.send_message(msg.chat.id, ACCESS_DENIED).await?;
                return Ok(());
            }
            bot.send_message(msg.chat.id, "🔐 Admin panel:")
                .reply_markup(admin_panel_keyboard())
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Cancel => {} // handled above
    };
    Ok(())
}
