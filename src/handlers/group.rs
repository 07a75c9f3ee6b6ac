use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Me;

use crate::database::DatabasePool;
use crate::handlers::HandlerResult;
use crate::handlers::ui::GENERIC_FAILURE;

fn group_title(chat_id: i64, title: Option<&str>) -> String {
    match title {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => format!("Group {}", chat_id),
    }
}

/// Remembers a group as soon as the bot itself shows up among new members.
pub async fn group_message_handler(
    bot: Bot,
    msg: Message,
    me: Me,
    db_pool: Arc<DatabasePool>,
) -> HandlerResult {
    let Some(members) = msg.new_chat_members() else {
        return Ok(());
    };

    if !members.iter().any(|member| member.id == me.user.id) {
        return Ok(());
    }

    let chat_id = msg.chat.id.0;
    let title = group_title(chat_id, msg.chat.title());

    if let Err(e) = db_pool.upsert_group(chat_id, title.clone()).await {
        log::error!("Failed to store group {}: {:#}", chat_id, e);
        bot.send_message(msg.chat.id, GENERIC_FAILURE).await?;
        return Ok(());
    }

    log::info!("Added to group {} ({})", chat_id, title);
    bot.send_message(msg.chat.id, "🤖 Thanks for adding me! I am ready to work.")
        .await?;
    Ok(())
}
