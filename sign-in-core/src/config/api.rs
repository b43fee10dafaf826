//! Account API configuration

use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;

/// Account API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AccountApiConfig {
    /// Base URL of the account backend, e.g. `https://api.example.com`
    pub host: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl AccountApiConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate account API configuration
    ///
    /// The host must be an absolute http(s) URL. In production, only HTTPS
    /// is accepted.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::MissingRequired("API__HOST"));
        }

        let url = Url::parse(&self.host).map_err(|e| ValidationError::InvalidApiHost {
            host: self.host.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "https" => {}
            "http" if environment.is_production() => {
                return Err(ValidationError::ApiHostMustBeHttps)
            }
            "http" => {}
            other => {
                return Err(ValidationError::InvalidApiHost {
                    host: self.host.clone(),
                    reason: format!("unsupported scheme '{}'", other),
                })
            }
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

fn default_request_timeout() -> u64 {
    30
}
