//! Server configuration from environment variables.
//!
//! Call `dotenvy::dotenv()` first so a local `.env` file is honored.

use std::time::Duration;
use thiserror::Error;

pub const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";
pub const WEBHOOK_TIMEOUT_VAR: &str = "WEBHOOK_TIMEOUT_SECS";

const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WEBHOOK_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where contact submissions are relayed. Missing is not a startup error;
    /// each submission fails until it is set.
    pub webhook_url: Option<String>,
    pub webhook_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_URL_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let webhook_timeout = match lookup(WEBHOOK_TIMEOUT_VAR) {
            None => DEFAULT_WEBHOOK_TIMEOUT,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
        };
        Ok(Self {
            webhook_url,
            webhook_timeout,
        })
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            webhook_timeout: DEFAULT_WEBHOOK_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_no_vars() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.has_webhook());
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = Config::from_lookup(lookup(&[
            (WEBHOOK_URL_VAR, "https://discord.com/api/webhooks/1/abc"),
            (WEBHOOK_TIMEOUT_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://discord.com/api/webhooks/1/abc")
        );
        assert_eq!(config.webhook_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_webhook_counts_as_missing() {
        let config = Config::from_lookup(lookup(&[(WEBHOOK_URL_VAR, "  ")])).unwrap();
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[(WEBHOOK_TIMEOUT_VAR, "soon")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".to_string()));
    }
}
