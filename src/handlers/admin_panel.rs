use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::admin_registry::AdminRegistry;
use crate::database::{DatabasePool, StoreSummary};
use crate::handlers::HandlerResult;
use crate::handlers::admin::{ACCESS_DENIED, user_key};
use crate::handlers::ui::GENERIC_FAILURE;
use crate::pending::{AdminAction, PendingDialogue, PendingState};

pub const ADMIN_CALLBACK_PREFIX: &str = "admin_";
pub const CB_ADMIN_BROADCAST_USERS: &str = "admin_broadcast_users";
pub const CB_ADMIN_BROADCAST_GROUPS: &str = "admin_broadcast_groups";
pub const CB_ADMIN_STATS: &str = "admin_stats";
pub const CB_ADMIN_ADD_ADMIN: &str = "admin_add_admin";
pub const CB_ADMIN_CLOSE: &str = "admin_close";

const PRIVATE_ONLY: &str = "Open /admin in a private chat with me to do this.";

pub fn is_admin_callback(data: &str) -> bool {
    data.starts_with(ADMIN_CALLBACK_PREFIX)
}

pub fn admin_panel_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("📢 Broadcast to users", CB_ADMIN_BROADCAST_USERS)],
        vec![InlineKeyboardButton::callback("📤 Broadcast to groups", CB_ADMIN_BROADCAST_GROUPS)],
        vec![InlineKeyboardButton::callback("📊 Statistics", CB_ADMIN_STATS)],
        vec![InlineKeyboardButton::callback("👤 Add admin", CB_ADMIN_ADD_ADMIN)],
        vec![InlineKeyboardButton::callback("❌ Close", CB_ADMIN_CLOSE)],
    ])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelAction {
    Close,
    Prompt(AdminAction),
    Stats,
    Unknown,
}

fn panel_action(data: &str) -> PanelAction {
    match data {
        CB_ADMIN_CLOSE => PanelAction::Close,
        CB_ADMIN_BROADCAST_USERS => PanelAction::Prompt(AdminAction::BroadcastUsers),
        CB_ADMIN_BROADCAST_GROUPS => PanelAction::Prompt(AdminAction::BroadcastGroups),
        CB_ADMIN_ADD_ADMIN => PanelAction::Prompt(AdminAction::AddAdmin),
        CB_ADMIN_STATS => PanelAction::Stats,
        _ => PanelAction::Unknown,
    }
}

fn prompt_text(action: AdminAction) -> &'static str {
    match action {
        AdminAction::BroadcastUsers => "Send the message to broadcast to all users.\n/cancel to abort.",
        AdminAction::BroadcastGroups => "Send the message to broadcast to all groups.\n/cancel to abort.",
        AdminAction::AddAdmin => "Enter the Telegram ID of the new admin:\n/cancel to abort.",
    }
}

fn summary_text(summary: &StoreSummary) -> String {
    format!(
        "📊 Statistics\n\n\
         👥 Users: {}\n\
         💬 Groups: {}\n\
         🔐 Admins: {}\n\
         🔥 Active today: {}",
        summary.users, summary.groups, summary.admins, summary.active_today
    )
}

pub async fn admin_callback_handler(
    bot: Bot,
    q: CallbackQuery,
    db_pool: Arc<DatabasePool>,
    registry: Arc<AdminRegistry>,
    dialogue: PendingDialogue,
) -> HandlerResult {
    let data = q.data.clone().unwrap_or_default();
    let operator = user_key(q.from.id);

    if !registry.is_privileged(operator).await {
        log::warn!("Non-admin {} pressed {:?}", operator, data);
        bot.answer_callback_query(q.id.clone())
            .text(ACCESS_DENIED)
            .show_alert(true)
            .await?;
        return Ok(());
    }

    bot.answer_callback_query(q.id.clone()).await?;

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };

    let text = match panel_action(&data) {
        PanelAction::Close => "Admin panel closed.".to_string(),
        PanelAction::Prompt(_) if !message.chat().is_private() => PRIVATE_ONLY.to_string(),
        PanelAction::Prompt(action) => {
            dialogue.update(PendingState::awaiting(action)).await?;
            prompt_text(action).to_string()
        }
        PanelAction::Stats => match db_pool.store_summary().await {
            Ok(summary) => summary_text(&summary),
            Err(e) => {
                log::error!("Stats DB error: {:#}", e);
                GENERIC_FAILURE.to_string()
            }
        },
        PanelAction::Unknown => {
            log::warn!("Unknown admin callback {:?} from {}", data, operator);
            "Unknown command.".to_string()
        }
    };

    bot.edit_message_text(message.chat().id, message.id(), text).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_callback() {
        assert!(is_admin_callback(CB_ADMIN_CLOSE));
        assert!(is_admin_callback("admin_whatever"));
        assert!(!is_admin_callback("menu_faq"));
        assert!(!is_admin_callback("main_menu"));
        assert!(!is_admin_callback("xadmin_close"));
    }

    #[test]
    fn test_panel_buttons_are_admin_callbacks() {
        let keyboard = admin_panel_keyboard();
        for button in keyboard.inline_keyboard.iter().flatten() {
            if let teloxide::types::InlineKeyboardButtonKind::CallbackData(data) = &button.kind {
                assert!(is_admin_callback(data));
                assert_ne!(panel_action(data), PanelAction::Unknown, "{}", data);
            }
        }
    }

    #[test]
    fn test_panel_action() {
        assert_eq!(panel_action(CB_ADMIN_CLOSE), PanelAction::Close);
        assert_eq!(
            panel_action(CB_ADMIN_ADD_ADMIN),
            PanelAction::Prompt(AdminAction::AddAdmin)
        );
        assert_eq!(panel_action("admin_nope"), PanelAction::Unknown);
    }

    #[test]
    fn test_summary_text() {
        let text = summary_text(&StoreSummary {
            users: 10,
            groups: 2,
            admins: 1,
            active_today: 4,
        });
        assert!(text.contains("Users: 10"));
        assert!(text.contains("Active today: 4"));
    }
}
