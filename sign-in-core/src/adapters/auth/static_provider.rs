//! Credential provider backed by a pre-obtained ID token.
//!
//! The interactive popup flow runs outside this process (a browser, a
//! device flow, a CI secret). The resulting token is handed in through
//! configuration and returned for every exchange.

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::foundation::Provider;
use crate::domain::session::ApiKey;
use crate::domain::sign_in::CredentialError;
use crate::ports::CredentialProvider;

/// Returns a configured token; fails with `MissingToken` if none is set.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    id_token: Option<Secret<String>>,
}

impl StaticCredentialProvider {
    /// Creates a provider from an optional configured token.
    pub fn new(id_token: Option<Secret<String>>) -> Self {
        Self { id_token }
    }

    /// Creates a provider that always returns `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Some(Secret::new(token.into())))
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn sign_in_with(&self, provider: Provider) -> Result<ApiKey, CredentialError> {
        match &self.id_token {
            Some(token) => {
                tracing::debug!(provider = %provider, "Using configured ID token");
                Ok(ApiKey::from(token.clone()))
            }
            None => {
                tracing::warn!(provider = %provider, "No ID token configured");
                Err(CredentialError::MissingToken)
            }
        }
    }
}
