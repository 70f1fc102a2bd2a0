use tracing::Level;

use crate::models::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub news_api_base_url: String,
    pub news_api_timeout_secs: u64,
    pub bind_addr: String,
    pub log_level: Level,
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let news_api_timeout_secs = match lookup("NEWS_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "NEWS_API_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            news_api_key: lookup("NEWS_API_KEY").ok_or(ConfigError::Missing("NEWS_API_KEY"))?,
            news_api_base_url: lookup("NEWS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            news_api_timeout_secs,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            // Unknown levels fall back to info.
            log_level: lookup("LOG_LEVEL")
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(Level::INFO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = config_from(&[("NEWS_API_KEY", "abc")]).unwrap();
        assert_eq!(config.news_api_key, "abc");
        assert_eq!(config.news_api_base_url, "https://newsapi.org/v2");
        assert_eq!(config.news_api_timeout_secs, 10);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn log_level_is_case_insensitive_with_fallback() {
        let config = config_from(&[("NEWS_API_KEY", "abc"), ("LOG_LEVEL", "DEBUG")]).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);

        let config = config_from(&[("NEWS_API_KEY", "abc"), ("LOG_LEVEL", "loud")]).unwrap();
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn missing_key_is_reported() {
        let err = config_from(&[]).unwrap_err();
        assert_eq!(err.to_string(), "NEWS_API_KEY not set");
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = config_from(&[("NEWS_API_KEY", "abc"), ("NEWS_API_TIMEOUT_SECS", "soon")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
