//! HTTP server configuration.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Settings for the HTTP listener and request handling.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; controls the log output format.
    #[serde(default)]
    pub environment: Environment,

    /// Default tracing filter directive, overridable via `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated CORS allow list; unset allows any origin.
    #[serde(default)]
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Resolves the bind address from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBindAddress` when `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(self.host.clone()))
    }

    /// Whether this instance runs in production.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Splits the configured CORS allow list into origins.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|raw| raw.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// Checks the configuration for values the server cannot start with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,umzugsplan=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
