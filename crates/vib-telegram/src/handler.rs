//! Inbound update classification for the webhook.
//!
//! Reduces a raw Telegram `Update` to the chat id and text the bot acts on.

use vib_protocol::Update;

/// A classified inbound update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingMessage {
    /// A message with a text body.
    Text { chat_id: i64, text: String },
    /// No message, or a message without text (stickers, photos, ...).
    Unsupported { update_id: i64 },
}

/// Classify a webhook update.
pub fn classify(update: &Update) -> IncomingMessage {
    match &update.message {
        Some(message) => match &message.text {
            Some(text) => IncomingMessage::Text {
                chat_id: message.chat.id,
                text: text.clone(),
            },
            None => IncomingMessage::Unsupported {
                update_id: update.update_id,
            },
        },
        None => IncomingMessage::Unsupported {
            update_id: update.update_id,
        },
    }
}
