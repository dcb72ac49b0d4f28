//! Vehicle lookup core for the Vehicle Info Bot.
//!
//! Classifies chat text into an `Action`, fetches the vehicles dataset
//! through a `DatasetSource`, finds the first matching record with
//! ordered field precedence (id, hex, name, model, gxt) and renders the
//! reply text. Matching and formatting are pure; the only I/O is the fetch.

pub mod dispatch;
pub mod error;
pub mod format;
pub mod matcher;
pub mod mock;
pub mod service;
pub mod source;

// Re-export key types for convenience
pub use dispatch::{Action, dispatch};
pub use error::{FetchError, FetchResult};
pub use matcher::{Match, MatchField, find, find_match};
pub use mock::MockDatasetSource;
pub use service::{Reply, VehicleLookup};
pub use source::{DatasetConfig, DatasetSource, HttpDatasetSource};
