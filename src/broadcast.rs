use std::future::Future;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, MessageId, ParseMode};

/// One piece of admin content, delivered once per recipient.
#[derive(Clone, Debug, PartialEq)]
pub enum BroadcastPayload {
    Text(String),
    Photo { file_id: FileId, caption: Option<String> },
    Document { file_id: FileId, caption: Option<String> },
    Copy { from_chat: ChatId, message_id: MessageId },
}

impl BroadcastPayload {
    /// Text first, then the largest photo, then a document, else a copy.
    pub fn from_message(msg: &Message) -> Self {
        let caption = msg.caption().map(str::to_string);

        if let Some(text) = msg.text() {
            BroadcastPayload::Text(text.to_string())
        } else if let Some(photo) = msg.photo().and_then(|sizes| sizes.last()) {
            BroadcastPayload::Photo {
                file_id: photo.file.id.clone(),
                caption,
            }
        } else if let Some(document) = msg.document() {
            BroadcastPayload::Document {
                file_id: document.file.id.clone(),
                caption,
            }
        } else {
            Self::copy_of(msg)
        }
    }

    pub fn copy_of(msg: &Message) -> Self {
        BroadcastPayload::Copy {
            from_chat: msg.chat.id,
            message_id: msg.id,
        }
    }
}

/// Delivery seam for the broadcast loop.
pub trait Courier {
    fn deliver(
        &self,
        recipient: ChatId,
        payload: &BroadcastPayload,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl Courier for Bot {
    async fn deliver(&self, recipient: ChatId, payload: &BroadcastPayload) -> anyhow::Result<()> {
        match payload {
            BroadcastPayload::Text(text) => {
                self.send_message(recipient, text.clone())
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
            BroadcastPayload::Photo { file_id, caption } => {
                let request = self.send_photo(recipient, InputFile::file_id(file_id.clone()));
                match caption {
                    Some(caption) => request.caption(caption.clone()).await?,
                    None => request.await?,
                };
            }
            BroadcastPayload::Document { file_id, caption } => {
                let request = self.send_document(recipient, InputFile::file_id(file_id.clone()));
                match caption {
                    Some(caption) => request.caption(caption.clone()).await?,
                    None => request.await?,
                };
            }
            BroadcastPayload::Copy {
                from_chat,
                message_id,
            } => {
                self.copy_message(recipient, *from_chat, *message_id).await?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub success: usize,
    pub errors: usize,
}

/// Sends `payload` to each recipient in order, one attempt each.
///
/// A failed delivery is logged and counted; it never stops the loop.
pub async fn broadcast<C: Courier>(
    courier: &C,
    recipients: &[i64],
    payload: &BroadcastPayload,
) -> BroadcastReport {
    let mut report = BroadcastReport::default();

    for &recipient in recipients {
        match courier.deliver(ChatId(recipient), payload).await {
            Ok(()) => report.success += 1,
            Err(e) => {
                log::warn!("Failed to deliver broadcast to {}: {}", recipient, e);
                report.errors += 1;
            }
        }
    }

    log::info!(
        "Broadcast finished: {} delivered, {} failed, {} recipients",
        report.success,
        report.errors,
        recipients.len()
    );
    report
}
