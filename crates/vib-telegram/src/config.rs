use serde::Deserialize;

/// Bot API connection settings.
#[derive(Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token from @BotFather.
    pub bot_token: String,
    /// Bot API base URL (overridable for tests / local Bot API servers).
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

pub fn default_api_url() -> String {
    "https://api.telegram.org".into()
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_url: default_api_url(),
        }
    }

    /// Full URL of a Bot API method.
    pub fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_url.trim_end_matches('/'),
            self.bot_token
        )
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_url() {
        let config = TelegramConfig::new("123:abc");
        assert_eq!(
            config.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn method_url_trims_trailing_slash() {
        let config = TelegramConfig {
            bot_token: "t".into(),
            api_url: "http://localhost:8081/".into(),
        };
        assert_eq!(config.method_url("getMe"), "http://localhost:8081/bott/getMe");
    }

    #[test]
    fn debug_redacts_token() {
        let config = TelegramConfig::new("secret-token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("redacted"));
    }
}
