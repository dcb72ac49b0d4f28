//! Telegram webhook endpoint.

use axum::body::Bytes;
use axum::extract::State;

use vib_protocol::Update;

use crate::bot;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST / — receive one update and handle it before acknowledging.
pub async fn receive_update(State(state): State<AppState>, body: Bytes) -> ApiResult<&'static str> {
    let update: Update = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting malformed update");
        ApiError::BadRequest(format!("invalid update: {e}"))
    })?;

    bot::handle_update(&state, &update).await;
    Ok("OK")
}
