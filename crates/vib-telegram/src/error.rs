//! Telegram transport error types.

use thiserror::Error;

/// Errors that can occur while talking to the Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("bot api returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Convenience alias for Telegram results.
pub type TelegramResult<T> = Result<T, TelegramError>;
