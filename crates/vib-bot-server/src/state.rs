//! Shared application state for the Axum server.
//!
//! Holds the injected collaborators only; nothing per-conversation is
//! stored, so concurrent updates never contend.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use vib_lookup::{DatasetSource, HttpDatasetSource, VehicleLookup};
use vib_telegram::{TelegramTransport, Transport};

use crate::config::BotConfig;

/// Shared application state, cloned into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Dispatch + search + render.
    pub lookup: VehicleLookup,
    /// Outbound delivery to chats.
    pub transport: Arc<dyn Transport>,
    /// Process start time, reported by `/health`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state around explicit collaborators (tests, alternative backends).
    pub fn new(source: Arc<dyn DatasetSource>, transport: Arc<dyn Transport>) -> Self {
        Self {
            lookup: VehicleLookup::new(source),
            transport,
            started_at: Utc::now(),
        }
    }

    /// Create production state: one pooled HTTP client shared by the
    /// dataset fetcher and the Bot API transport.
    pub fn from_config(config: &BotConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        let source = HttpDatasetSource::new(client.clone(), config.dataset());
        let transport = TelegramTransport::new(client, config.telegram());

        Ok(Self::new(Arc::new(source), Arc::new(transport)))
    }
}
