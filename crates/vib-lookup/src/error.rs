//! Dataset fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching the vehicles dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid dataset: {0}")]
    Parse(String),
}

/// Convenience alias for dataset fetch results.
pub type FetchResult<T> = Result<T, FetchError>;
