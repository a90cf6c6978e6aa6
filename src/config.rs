//! Runtime configuration for the board client.

use std::time::Duration;

use reqwest::Url;

use crate::error::{BoardError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin the `/activities` endpoints hang off, without a trailing slash.
    pub api_base_url: String,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
    pub log_level: tracing::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
            log_level: tracing::Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Same-origin configuration for the browser build.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        let origin = web_sys::window()
            .ok_or_else(|| BoardError::Config("no window".into()))?
            .location()
            .origin()
            .map_err(|e| BoardError::Config(format!("location.origin: {e:?}")))?;
        Self::default().with_base_url(&origin)
    }

    /// Native builds read `.env` and `ACTIVITY_BOARD_*` variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("ACTIVITY_BOARD_API_URL") {
            config = config.with_base_url(&url)?;
        }
        if let Some(ms) = lookup("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .map_err(|_| BoardError::Config(format!("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS: {ms:?}")))?;
            config.message_timeout = Duration::from_millis(ms);
        }
        if let Some(level) = lookup("ACTIVITY_BOARD_LOG") {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| BoardError::Config(format!("ACTIVITY_BOARD_LOG: {level:?}")))?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| BoardError::Config(format!("{trimmed:?}: {e}")))?;
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.message_timeout, Duration::from_secs(5));
    }

    #[test]
    fn reads_overrides_and_trims_slash() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ACTIVITY_BOARD_API_URL", "http://school.example:9000/"),
            ("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS", "250"),
            ("ACTIVITY_BOARD_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://school.example:9000");
        assert_eq!(config.message_timeout, Duration::from_millis(250));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("ACTIVITY_BOARD_API_URL", "not a url")])),
            Err(BoardError::Config(_))
        ));
        assert!(ClientConfig::from_lookup(lookup(&[("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS", "soon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[("ACTIVITY_BOARD_LOG", "loud")])).is_err());
    }
}
