//! Bot server configuration, loadable from TOML with environment overrides.

use serde::Deserialize;
use vib_lookup::DatasetConfig;
use vib_telegram::TelegramConfig;

/// Top-level bot server configuration.
#[derive(Clone, Deserialize)]
pub struct BotConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Telegram bot token (BOT_TOKEN). Required.
    #[serde(default)]
    pub bot_token: String,
    /// Bot API base URL (TELEGRAM_API_URL).
    #[serde(default = "vib_telegram::config::default_api_url")]
    pub telegram_api_url: String,
    /// Remote vehicles dataset (VEHICLES_JSON_URL).
    #[serde(default = "default_vehicles_json_url")]
    pub vehicles_json_url: String,
    /// Timeout for every outbound HTTP call (HTTP_TIMEOUT_SECS).
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_vehicles_json_url() -> String {
    DatasetConfig::default().url
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl BotConfig {
    /// Load config from environment variables only.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file; environment variables take precedence.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override fields from a key lookup (env-style names).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(token) = lookup("BOT_TOKEN") {
            self.bot_token = token;
        }
        if let Some(url) = lookup("TELEGRAM_API_URL") {
            self.telegram_api_url = url;
        }
        if let Some(url) = lookup("VEHICLES_JSON_URL") {
            self.vehicles_json_url = url;
        }
        if let Some(secs) = lookup("HTTP_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.http_timeout_secs = secs;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is not set");
        }
        Ok(())
    }

    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            bot_token: self.bot_token.clone(),
            api_url: self.telegram_api_url.clone(),
        }
    }

    pub fn dataset(&self) -> DatasetConfig {
        DatasetConfig {
            url: self.vehicles_json_url.clone(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            bot_token: String::new(),
            telegram_api_url: vib_telegram::config::default_api_url(),
            vehicles_json_url: default_vehicles_json_url(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("bot_token", &"<redacted>")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("vehicles_json_url", &self.vehicles_json_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}
