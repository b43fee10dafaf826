//! Credential provider port - the identity provider exchange.
//!
//! The popup/redirect flow that talks to the identity provider lives
//! outside this crate. The sign-in orchestrator only sees an async call
//! that yields a bearer credential or fails.

use async_trait::async_trait;

use crate::domain::foundation::Provider;
use crate::domain::session::ApiKey;
use crate::domain::sign_in::CredentialError;

/// Obtains a bearer credential from a third-party identity provider.
///
/// # Contract
///
/// Implementations must:
/// - Return the provider-issued token on success
/// - Return `CredentialError::MissingToken` if the provider answered without one
/// - Return `CredentialError::Rejected` for every other failure
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Runs the credential exchange against `provider`.
    async fn sign_in_with(&self, provider: Provider) -> Result<ApiKey, CredentialError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    #[async_trait]
    impl CredentialProvider for FixedProvider {
        async fn sign_in_with(&self, provider: Provider) -> Result<ApiKey, CredentialError> {
            match provider {
                Provider::Google => Ok(ApiKey::new("google-token")),
            }
        }
    }

    #[tokio::test]
    async fn provider_returns_token_for_google() {
        let key = FixedProvider.sign_in_with(Provider::Google).await.unwrap();
        assert_eq!(key.expose_secret(), "google-token");
    }

    #[test]
    fn credential_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn CredentialProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn CredentialProvider>>();
    }
}
