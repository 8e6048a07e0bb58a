//! Configuration module

use std::env;

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER};
use crate::error::{MetadataError, MetadataResult};

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// env_logger filter used by `init_logging`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_filter: lookup(ENV_LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Reject a filter the logger cannot act on
    pub fn validate(&self) -> MetadataResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(MetadataError::Config(format!(
                "{} must not be empty",
                ENV_LOG_FILTER
            )));
        }

        Ok(())
    }
}

/// Initialize env_logger with the configured filter.
///
/// Fails if the configuration is invalid or a logger is already installed.
pub fn init_logging(config: &Config) -> MetadataResult<()> {
    config.validate()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .try_init()
        .map_err(|e| MetadataError::Config(format!("Logger init failed: {}", e)))?;

    log::debug!("Logging initialized (filter: {})", config.log_filter);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_log_filter() {
        let config = Config::from_vars(|key| {
            (key == ENV_LOG_FILTER).then(|| "feature_metadata=debug".to_string())
        });

        assert_eq!(config.log_filter, "feature_metadata=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_filter() {
        let config = Config {
            log_filter: "  ".to_string(),
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, MetadataError::Config(_)));
        assert!(err.to_string().contains(ENV_LOG_FILTER));
    }

    #[test]
    fn test_init_logging_rejects_invalid_config_before_install() {
        let config = Config {
            log_filter: String::new(),
        };
        assert!(matches!(init_logging(&config), Err(MetadataError::Config(_))));
    }
}
