//! Mock transport for testing without the Bot API.
//!
//! Records every delivery for assertion in tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use vib_protocol::ParseMode;

use crate::error::{TelegramError, TelegramResult};
use crate::transport::Transport;

/// A recorded deliver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredMessage {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

/// Mock implementation of the `Transport` trait.
///
/// Deliveries are recorded even when `fail` is set, so tests can check
/// that a failed send was attempted exactly once.
pub struct MockTransport {
    delivered: Mutex<Vec<DeliveredMessage>>,
    fail: AtomicBool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    /// A transport whose every delivery returns an API error.
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.fail.store(true, Ordering::SeqCst);
        mock
    }

    /// Get all delivered messages.
    pub fn delivered(&self) -> Vec<DeliveredMessage> {
        self.delivered.lock().unwrap().clone()
    }

    /// Get the last delivered message.
    pub fn last_delivered(&self) -> Option<DeliveredMessage> {
        self.delivered.lock().unwrap().last().cloned()
    }

    /// Get messages delivered to a specific chat.
    pub fn delivered_to(&self, chat_id: i64) -> Vec<DeliveredMessage> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn deliver(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> TelegramResult<()> {
        self.delivered.lock().unwrap().push(DeliveredMessage {
            chat_id,
            text: text.to_string(),
            parse_mode,
        });
        if self.fail.load(Ordering::SeqCst) {
            return Err(TelegramError::Api {
                status: 403,
                body: "Forbidden: bot was blocked by the user".into(),
            });
        }
        Ok(())
    }
}
