//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Server port must not be 0")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("'{0}' is not a valid bind address; use an IP address")]
    InvalidBindAddress(String),
}
