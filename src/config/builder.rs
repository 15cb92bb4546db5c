//! Configuration builder
//!
//! Merges configuration from files and CLI arguments. CLI values (which
//! already include environment fallback via clap) override file values,
//! which override built-in defaults.

use crate::config::{Config, ConfigFile};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = if let Some(path) = path {
            ConfigFile::load(path).ok()
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override with CLI threshold
    pub fn with_threshold(mut self, threshold: Option<f64>) -> Self {
        if let Some(t) = threshold {
            self.config.monitor.threshold = t;
        }
        self
    }

    /// Override with CLI interval
    pub fn with_interval(mut self, interval: Option<u64>) -> Self {
        if let Some(i) = interval {
            self.config.monitor.interval_seconds = i;
        }
        self
    }

    /// Override with CLI channel
    pub fn with_channel(mut self, channel: Option<String>) -> Self {
        if let Some(c) = channel {
            self.config.slack.channel = c;
        }
        self
    }

    /// Override with CLI token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(t) = token {
            self.config.slack.token = Some(t);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
