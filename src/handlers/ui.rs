use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    LinkPreviewOptions, MessageId, ParseMode,
};

use crate::menu::{ButtonAction, Screen};

pub const GENERIC_FAILURE: &str = "⚠️ Something went wrong. Please try again later.";

/// Persistent reply keyboard holding `/start`.
pub fn get_main_reply_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new("/start")]]).resize_keyboard()
}

pub fn inline_keyboard(screen: &Screen) -> InlineKeyboardMarkup {
    let rows = screen.rows.iter().map(|row| {
        row.iter()
            .filter_map(|button| match &button.action {
                ButtonAction::Callback(data) => {
                    Some(InlineKeyboardButton::callback(button.label, *data))
                }
                ButtonAction::Url(href) => match Url::parse(href) {
                    Ok(url) => Some(InlineKeyboardButton::url(button.label, url)),
                    Err(e) => {
                        log::error!("Skipping button {:?} with bad url {:?}: {}", button.label, href, e);
                        None
                    }
                },
            })
            .collect::<Vec<_>>()
    });
    InlineKeyboardMarkup::new(rows)
}

fn preview_disabled() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Where a screen goes: a fresh message, or an edit of the message that
/// carried the pressed button.
#[derive(Clone, Copy, Debug)]
pub enum MenuTarget {
    NewMessage { chat_id: ChatId },
    Callback { chat_id: ChatId, message_id: MessageId },
}

impl MenuTarget {
    pub fn chat_id(&self) -> ChatId {
        match *self {
            MenuTarget::NewMessage { chat_id } | MenuTarget::Callback { chat_id, .. } => chat_id,
        }
    }
}

pub async fn present(bot: &Bot, target: MenuTarget, screen: &Screen) -> Result<(), teloxide::RequestError> {
    let keyboard = inline_keyboard(screen);
    match target {
        MenuTarget::NewMessage { chat_id } => {
            let mut request = bot.send_message(chat_id, screen.text).reply_markup(keyboard);
            if screen.html {
                request = request.parse_mode(ParseMode::Html);
            }
            if !screen.link_preview {
                request = request.link_preview_options(preview_disabled());
            }
            request.await?;
        }
        MenuTarget::Callback { chat_id, message_id } => {
            let mut request = bot
                .edit_message_text(chat_id, message_id, screen.text)
                .reply_markup(keyboard);
            if screen.html {
                request = request.parse_mode(ParseMode::Html);
            }
            if !screen.link_preview {
                request = request.link_preview_options(preview_disabled());
            }
            request.await?;
        }
    }
    Ok(())
}
