//! Outbound delivery to Telegram chats.

use async_trait::async_trait;

use vib_protocol::{ApiResponse, ParseMode, SendMessage};

use crate::config::TelegramConfig;
use crate::error::{TelegramError, TelegramResult};

// ── Transport trait ───────────────────────────────────────────

/// Abstraction for delivering reply text to a conversation.
///
/// Enables mocking in tests without the Bot API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> TelegramResult<()>;
}

// ── TelegramTransport ─────────────────────────────────────────

/// Bot API transport sharing the process-wide `reqwest::Client`.
pub struct TelegramTransport {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramTransport {
    pub fn new(client: reqwest::Client, config: TelegramConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn deliver(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> TelegramResult<()> {
        let body = SendMessage {
            chat_id,
            text: text.to_string(),
            parse_mode,
        };

        let response = self
            .client
            .post(self.config.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ApiResponse>(&raw)
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(raw);
            return Err(TelegramError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(chat_id, "message delivered");
        Ok(())
    }
}
