//! Dataset source abstraction — fetch the vehicles snapshot over HTTP or from mocks.

use async_trait::async_trait;
use serde::Deserialize;
use vib_protocol::Dataset;

use crate::error::{FetchError, FetchResult};

/// Abstraction for retrieving a fresh dataset snapshot.
///
/// Called once per search; implementations must not cache.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> FetchResult<Dataset>;
}

/// Location of the remote vehicles JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    "https://raw.githubusercontent.com/xzd0x/IDS/refs/heads/main/data/vehicles.json".into()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

/// Fetches the dataset with a shared `reqwest::Client`.
///
/// The client (and its timeout) is owned by the server process.
pub struct HttpDatasetSource {
    client: reqwest::Client,
    config: DatasetConfig,
}

impl HttpDatasetSource {
    pub fn new(client: reqwest::Client, config: DatasetConfig) -> Self {
        Self { client, config }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> FetchResult<Dataset> {
        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let dataset: Dataset =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!(records = dataset.len(), url = %self.config.url, "dataset fetched");
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> HttpDatasetSource {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        HttpDatasetSource::new(
            client,
            DatasetConfig {
                url: format!("{}/vehicles.json", server.uri()),
            },
        )
    }

    #[tokio::test]
    async fn fetch_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "400", "hex": "190", "name": "Landstalker"},
                {"id": 401, "name": "Bravura", "extra": true}
            ])))
            .mount(&server)
            .await;

        let dataset = source_for(&server).fetch().await.unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[1].name.as_deref(), Some("Bravura"));
    }

    #[tokio::test]
    async fn fetch_tolerates_odd_field_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "400", "name": "Landstalker", "notes": 1},
                {"id": "401", "name": "Bravura", "model": 411}
            ])))
            .mount(&server)
            .await;

        let dataset = source_for(&server).fetch().await.unwrap();
        let found = crate::matcher::find(&dataset, "bravura").unwrap();
        assert_eq!(found.model.as_deref(), Some("411"));
        assert_eq!(dataset[0].notes.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn fetch_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn fetch_object_instead_of_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"vehicles": []})),
            )
            .mount(&server)
            .await;

        let err = source_for(&server).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        // Client timeout is 2s, mock delays 10s
        let err = source_for(&server).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[tokio::test]
    async fn fetch_unreachable() {
        let client = reqwest::Client::new();
        let source = HttpDatasetSource::new(
            client,
            DatasetConfig {
                url: "http://127.0.0.1:1/vehicles.json".into(),
            },
        );
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[test]
    fn config_default_url() {
        let config = DatasetConfig::default();
        assert!(config.url.ends_with("/vehicles.json"));
    }
}
