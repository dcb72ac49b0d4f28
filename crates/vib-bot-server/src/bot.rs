//! Update handling: classify → look up → deliver.
//!
//! Delivery failures are logged and dropped; the webhook still acknowledges
//! the update so Telegram does not redeliver it.

use vib_protocol::Update;
use vib_telegram::{IncomingMessage, classify};

use crate::state::AppState;

/// Handle one webhook update to completion. Sends at most one message.
pub async fn handle_update(state: &AppState, update: &Update) {
    let (chat_id, text) = match classify(update) {
        IncomingMessage::Text { chat_id, text } => (chat_id, text),
        IncomingMessage::Unsupported { update_id } => {
            tracing::debug!(update_id, "ignoring update without text");
            return;
        }
    };

    let Some(reply) = state.lookup.respond(&text).await else {
        tracing::debug!(chat_id, "ignoring blank message");
        return;
    };

    if let Err(e) = state
        .transport
        .deliver(chat_id, &reply.text, reply.parse_mode)
        .await
    {
        tracing::error!(chat_id, error = %e, "failed to send message");
    }
}
