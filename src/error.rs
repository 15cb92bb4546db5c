//! Unified error types for memwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from reading memory statistics
    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Error from delivering a notification
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// IO error (file operations, terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the memory sampler
///
/// Sampler errors are fatal: a monitor that cannot read real memory
/// statistics must not keep running on stale or default values.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// The platform metrics interface did not return usable data
    #[error("Memory statistics unavailable: {0}")]
    Unavailable(String),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid threshold value (must be within (0, 100])
    #[error("Invalid threshold: {0}% (must be greater than 0 and at most 100)")]
    InvalidThreshold(f64),

    /// Invalid poll interval (must be a positive number of seconds)
    #[error("Invalid poll interval: {0}s (must be greater than 0)")]
    InvalidInterval(u64),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Slack token absent from flag, environment, and config file
    #[error("Slack bot token must be set via --slack-token or the SLACK_BOT_TOKEN environment variable")]
    MissingToken,

    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from notification delivery
///
/// Delivery errors are recoverable: they are logged and the poll loop
/// continues, because the alert state tracks the real memory condition
/// independently of whether Slack accepted the message.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Transport failure or non-success HTTP status
    #[error("Failed to send Slack message: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack accepted the request but rejected the message
    #[error("Slack API error: {0}")]
    Api(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
