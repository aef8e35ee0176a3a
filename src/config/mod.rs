use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_RUST_ENV: &str = "development";
const DEFAULT_LOG_FILTER: &str = "agora_events=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Tracing subscriber already installed: {0}")]
    SubscriberInit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rust_env: String,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            rust_env: lookup("RUST_ENV").unwrap_or_else(|| DEFAULT_RUST_ENV.to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.rust_env.to_lowercase() == "production"
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })
    }
}

/// Installs the global fmt subscriber. Fails instead of panicking if one is already set.
pub fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .try_init()
        .map_err(|e| ConfigError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        rust_env = %config.rust_env,
        log_filter = %config.log_filter,
        "Tracing initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.rust_env, "development");
        assert_eq!(config.log_filter, "agora_events=info");
        assert!(!config.is_production());
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(|key| match key {
            "RUST_ENV" => Some("Production".to_string()),
            "RUST_LOG" => Some("agora_events=debug".to_string()),
            _ => None,
        });
        assert!(config.is_production());
        assert_eq!(config.log_filter, "agora_events=debug");
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_invalid_log_filter() {
        let config = Config::from_lookup(|key| (key == "RUST_LOG").then(|| "agora_events=loud".to_string()));
        assert!(matches!(
            config.env_filter(),
            Err(ConfigError::InvalidLogFilter { .. })
        ));
    }

    #[test]
    fn test_second_init_is_an_error() {
        let config = Config::from_lookup(|_| None);
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(ConfigError::SubscriberInit(_))
        ));
    }
}
