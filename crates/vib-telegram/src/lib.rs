//! Telegram messaging transport for the Vehicle Info Bot.
//!
//! - `Transport` trait for outbound delivery (mockable in tests)
//! - `TelegramTransport` calling the Bot API `sendMessage` method
//! - `MockTransport` recording deliveries for assertions
//! - `classify` turning webhook updates into `IncomingMessage`

pub mod config;
pub mod error;
pub mod handler;
pub mod mock;
pub mod transport;

// Re-exports for convenience.
pub use config::TelegramConfig;
pub use error::{TelegramError, TelegramResult};
pub use handler::{IncomingMessage, classify};
pub use mock::{DeliveredMessage, MockTransport};
pub use transport::{TelegramTransport, Transport};
