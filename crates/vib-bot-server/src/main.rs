//! Vehicle Info Bot — Telegram webhook server.
//!
//! Receives updates on `POST /`, answers vehicle lookups from the remote
//! dataset, and exposes `GET /health`.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vib_bot_server::config::BotConfig;
use vib_bot_server::routes;
use vib_bot_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vib-bot-server starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => BotConfig::from_file(&path)?,
        None => BotConfig::from_env()?,
    };
    tracing::info!(
        dataset = %config.vehicles_json_url,
        timeout_secs = config.http_timeout_secs,
        "config loaded"
    );

    let state = AppState::from_config(&config)?;
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("vib-bot-server stopped");
    Ok(())
}
