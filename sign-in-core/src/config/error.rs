//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid account API host '{host}': {reason}")]
    InvalidApiHost { host: String, reason: String },

    #[error("Account API host must use HTTPS in production")]
    ApiHostMustBeHttps,

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
