//! Identity provider configuration

use secrecy::Secret;
use serde::Deserialize;

/// Credential provider configuration
///
/// The ID token is obtained out of process and handed in here. Without it
/// every sign-in fails at the credential step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// Pre-obtained ID token
    pub id_token: Option<Secret<String>>,
}

impl ProviderConfig {
    /// Check whether a token is configured
    pub fn has_token(&self) -> bool {
        self.id_token.is_some()
    }
}
