use teloxide::prelude::*;

pub const ACCESS_DENIED: &str = "❌ You do not have access.";

/// Telegram user ids are unsigned; the store keys them as i64.
pub fn user_key(id: UserId) -> i64 {
    id.0 as i64
}

pub fn sender_key(msg: &Message) -> Option<i64> {
    msg.from.as_ref().map(|user| user_key(user.id))
}
