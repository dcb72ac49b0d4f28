//! Shared test harness for E2E integration tests.
//!
//! Runs the real router, `HttpDatasetSource` and `TelegramTransport`
//! against two wiremock servers: one serving `vehicles.json`, one
//! standing in for the Telegram Bot API.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vib_bot_server::config::BotConfig;
use vib_bot_server::routes::build_router;
use vib_bot_server::state::AppState;

pub const BOT_TOKEN: &str = "123456:TEST";
pub const SEND_PATH: &str = "/bot123456:TEST/sendMessage";

/// End-to-end harness: router + dataset server + Bot API server.
pub struct TestHarness {
    pub router: Router,
    pub dataset: MockServer,
    pub telegram: MockServer,
}

impl TestHarness {
    /// Start both mock servers and build state the way `main` does.
    pub async fn start() -> Self {
        let dataset = MockServer::start().await;
        let telegram = MockServer::start().await;

        let config = BotConfig {
            bot_token: BOT_TOKEN.into(),
            telegram_api_url: telegram.uri(),
            vehicles_json_url: format!("{}/vehicles.json", dataset.uri()),
            http_timeout_secs: 2,
            ..BotConfig::default()
        };
        let state = AppState::from_config(&config).expect("state builds");

        Self {
            router: build_router(state),
            dataset,
            telegram,
        }
    }

    /// Serve `body` as the dataset with the given status.
    pub async fn serve_dataset(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/vehicles.json"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.dataset)
            .await;
    }

    /// Serve the standard sample dataset.
    pub async fn serve_sample_dataset(&self) {
        self.serve_dataset(200, sample_dataset()).await;
    }

    /// Accept every sendMessage call with the given status.
    pub async fn accept_messages(&self, status: u16) {
        let body = if status == 200 {
            json!({"ok": true, "result": {}})
        } else {
            json!({"ok": false, "description": "Forbidden: bot was blocked by the user"})
        };
        Mock::given(method("POST"))
            .and(path(SEND_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.telegram)
            .await;
    }

    /// POST a text message update to the webhook.
    pub async fn send_text(&self, chat_id: i64, text: &str) -> (StatusCode, String) {
        self.post_update(json!({
            "update_id": 1000,
            "message": {
                "message_id": 1,
                "date": 1700000000,
                "chat": {"id": chat_id, "type": "private"},
                "text": text
            }
        }))
        .await
    }

    /// POST a raw update to the webhook.
    pub async fn post_update(&self, update: Value) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&update).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    /// All sendMessage bodies received by the Bot API mock.
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.telegram
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == SEND_PATH)
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }

    /// Number of dataset fetches so far.
    pub async fn dataset_fetches(&self) -> usize {
        self.dataset
            .received_requests()
            .await
            .unwrap_or_default()
            .len()
    }
}

/// A small dataset mixing string and numeric ids.
pub fn sample_dataset() -> Value {
    json!([
        {"id": "400", "hex": "190", "name": "Landstalker", "model": "landstal", "gxt": "LANDSTK"},
        {"id": "401", "hex": "191", "name": "Bravura", "model": "bravura", "gxt": "BRAVURA"},
        {"id": 520, "hex": "208", "name": "Hydra", "model": "hydra", "gxt": null, "notes": "rare spawn"},
        {"id": "596", "hex": "254", "name": null, "model": "copcarla", "gxt": "POLICAR"}
    ])
}
