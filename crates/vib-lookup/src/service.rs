//! Orchestration: dispatch → fetch → match → render.
//!
//! Every failure ends here as reply text; nothing propagates to the caller.

use std::sync::Arc;

use vib_protocol::ParseMode;

use crate::dispatch::{Action, dispatch};
use crate::format;
use crate::matcher::find_match;
use crate::source::DatasetSource;

/// Outbound reply text and how the transport should format it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(ParseMode::Markdown),
        }
    }
}

/// Stateless lookup service; cheap to clone and share across requests.
#[derive(Clone)]
pub struct VehicleLookup {
    source: Arc<dyn DatasetSource>,
}

impl VehicleLookup {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Produce the reply for an inbound message, or `None` for blank text.
    pub async fn respond(&self, text: &str) -> Option<Reply> {
        match dispatch(text) {
            Action::Ignore => None,
            Action::ShowWelcome => Some(Reply::plain(format::render_welcome())),
            Action::ShowHelp => Some(Reply::markdown(format::render_help())),
            Action::SearchVehicle(query) => Some(self.search(&query).await),
        }
    }

    /// Fetch a fresh snapshot and search it. No retries.
    pub async fn search(&self, query: &str) -> Reply {
        let dataset = match self.source.fetch().await {
            Ok(dataset) if !dataset.is_empty() => dataset,
            Ok(_) => {
                tracing::warn!("vehicles dataset is empty");
                return Reply::plain(format::render_fetch_error());
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch vehicles dataset");
                return Reply::plain(format::render_fetch_error());
            }
        };

        match find_match(&dataset, query) {
            Some(m) => {
                tracing::debug!(query, matched_on = m.field.as_str(), "vehicle found");
                Reply::markdown(format::render_vehicle(m.record))
            }
            None => {
                tracing::debug!(query, records = dataset.len(), "no vehicle found");
                Reply::plain(format::render_not_found(query))
            }
        }
    }
}
