//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging. Resolution
//! order for every setting: CLI flag, then environment variable, then
//! config file, then built-in default.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::Threshold;
use crate::error::{ConfigError, DomainError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Monitor loop settings
    pub monitor: MonitorSettings,
    /// Slack delivery settings
    pub slack: SlackSettings,
}

/// Monitor loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// Memory usage percent threshold to trigger an alert
    pub threshold: f64,
    /// Poll interval in seconds
    pub interval_seconds: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            interval_seconds: 60,
        }
    }
}

/// Slack delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    /// Destination channel (name or ID)
    pub channel: String,
    /// Bot OAuth token; required unless delivery is disabled
    pub token: Option<String>,
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            channel: "#general".to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Validate and convert the threshold setting
    pub fn threshold(&self) -> Result<Threshold, DomainError> {
        Threshold::new(self.monitor.threshold)
    }

    /// Validate and convert the poll interval setting
    pub fn interval(&self) -> Result<Duration, DomainError> {
        if self.monitor.interval_seconds == 0 {
            return Err(DomainError::InvalidInterval(self.monitor.interval_seconds));
        }
        Ok(Duration::from_secs(self.monitor.interval_seconds))
    }

    /// The Slack token, failing when absent or empty
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        match self.slack.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.monitor.threshold, 80.0);
        assert_eq!(config.monitor.interval_seconds, 60);
        assert_eq!(config.slack.channel, "#general");
        assert!(config.slack.token.is_none());
    }

    #[test]
    fn test_threshold_conversion() {
        let config = Config::default();
        assert_eq!(config.threshold().unwrap().percent(), 80.0);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = Config::default();
        config.monitor.threshold = 150.0;
        assert!(config.threshold().is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default();
        config.monitor.interval_seconds = 0;
        assert!(matches!(
            config.interval(),
            Err(DomainError::InvalidInterval(0))
        ));
    }

    #[test]
    fn test_require_token_missing() {
        let config = Config::default();
        assert!(matches!(
            config.require_token(),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn test_require_token_empty() {
        let mut config = Config::default();
        config.slack.token = Some(String::new());
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_require_token_present() {
        let mut config = Config::default();
        config.slack.token = Some("xoxb-token".to_string());
        assert_eq!(config.require_token().unwrap(), "xoxb-token");
    }
}
