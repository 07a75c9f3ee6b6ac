use std::sync::Arc;
use teloxide::prelude::*;

use crate::admin_registry::AdminRegistry;
use crate::broadcast::{BroadcastPayload, BroadcastReport, broadcast};
use crate::database::DatabasePool;
use crate::errors::{AdminError, parse_admin_id};
use crate::handlers::HandlerResult;
use crate::handlers::admin::{ACCESS_DENIED, sender_key};
use crate::handlers::ui::GENERIC_FAILURE;
use crate::pending::{AdminAction, PendingDialogue};

fn report_text(audience: &str, report: BroadcastReport) -> String {
    format!(
        "✅ Broadcast to {} finished.\nDelivered: {}\nFailed: {}",
        audience, report.success, report.errors
    )
}

/// Handles the reply to the "add admin" prompt and returns what to tell the
/// operator.
pub async fn add_admin_from_text(registry: &AdminRegistry, operator: i64, text: &str) -> String {
    let outcome = match parse_admin_id(text) {
        Ok(candidate) => registry.add_admin(operator, candidate).await.map(|added| (candidate, added)),
        Err(e) => Err(e),
    };

    match outcome {
        Ok((candidate, true)) => format!("✅ User {} is now an admin!", candidate),
        Ok((candidate, false)) => format!("ℹ️ User {} is already an admin.", candidate),
        Err(AdminError::PermissionDenied { .. }) => ACCESS_DENIED.to_string(),
        Err(AdminError::MalformedId(raw)) => {
            log::info!("Rejected admin id {:?} from {}", raw, operator);
            "❌ Invalid ID. Send the numeric Telegram user ID, e.g. 123456789.".to_string()
        }
        Err(AdminError::Store(e)) => {
            log::error!("Failed to store new admin: {:#}", e);
            GENERIC_FAILURE.to_string()
        }
    }
}

pub async fn admin_input_handler(
    bot: Bot,
    msg: Message,
    action: AdminAction,
    dialogue: PendingDialogue,
    db_pool: Arc<DatabasePool>,
    registry: Arc<AdminRegistry>,
) -> HandlerResult {
    dialogue.exit().await?;

    let Some(operator) = sender_key(&msg) else {
        return Ok(());
    };

    if !registry.is_privileged(operator).await {
        log::warn!("Dropped pending {:?} of non-admin {}", action, operator);
        return Ok(());
    }

    match action {
        AdminAction::BroadcastUsers => {
            let users = match db_pool.list_users().await {
                Ok(users) => users,
                Err(e) => {
                    log::error!("Failed to load users for broadcast: {:#}", e);
                    bot.send_message(msg.chat.id, GENERIC_FAILURE).await?;
                    return Ok(());
                }
            };

            bot.send_message(msg.chat.id, format!("🚀 Broadcasting to {} users...", users.len()))
                .await?;
            let payload = BroadcastPayload::from_message(&msg);
            let report = broadcast(&bot, &users, &payload).await;
            bot.send_message(msg.chat.id, report_text("users", report)).await?;
        }
        AdminAction::BroadcastGroups => {
            let groups = match db_pool.list_groups().await {
                Ok(groups) => groups,
                Err(e) => {
                    log::error!("Failed to load groups for broadcast: {:#}", e);
                    bot.send_message(msg.chat.id, GENERIC_FAILURE).await?;
                    return Ok(());
                }
            };

            if groups.is_empty() {
                bot.send_message(msg.chat.id, "No saved groups.").await?;
                return Ok(());
            }

            let payload = BroadcastPayload::copy_of(&msg);
            let report = broadcast(&bot, &groups, &payload).await;
            bot.send_message(msg.chat.id, report_text("groups", report)).await?;
        }
        AdminAction::AddAdmin => {
            let reply = add_admin_from_text(&registry, operator, msg.text().unwrap_or_default()).await;
            bot.send_message(msg.chat.id, reply).await?;
        }
    }

    Ok(())
}
