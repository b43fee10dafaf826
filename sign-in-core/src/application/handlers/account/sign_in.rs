//! SignInHandler - Orchestrates credential exchange and account reconciliation.
//!
//! One run:
//! 1. exchanges a credential with the identity provider,
//! 2. writes the authenticated session,
//! 3. verifies the identity against the backend and, only if the backend
//!    does not know it yet, signs it up,
//! 4. pushes exactly one `SignInResult` to the observer.
//!
//! Nothing escapes `sign_in`: every failure becomes an error result.

use std::sync::Arc;

use crate::domain::foundation::{Provider, UnknownError};
use crate::domain::session::Session;
use crate::domain::sign_in::{SignInError, SignInResult, SignUpError, SignedInUser, VerifyError};
use crate::ports::{AccountRegistrar, AccountVerifier, CredentialProvider, Observer, SessionStore};

/// Handler for the sign-in user action.
///
/// All collaborators are injected at construction; `sign_in` takes no
/// arguments and reports its outcome only through the observer.
///
/// Runs are not serialized: two concurrent runs race on the session store
/// (last writer wins) and may deliver their results in either order.
pub struct SignInHandler {
    credential_provider: Arc<dyn CredentialProvider>,
    verifier: Arc<dyn AccountVerifier>,
    registrar: Arc<dyn AccountRegistrar>,
    session_store: Arc<dyn SessionStore>,
    observer: Arc<dyn Observer<SignInResult>>,
}

impl SignInHandler {
    pub fn new(
        credential_provider: Arc<dyn CredentialProvider>,
        verifier: Arc<dyn AccountVerifier>,
        registrar: Arc<dyn AccountRegistrar>,
        session_store: Arc<dyn SessionStore>,
        observer: Arc<dyn Observer<SignInResult>>,
    ) -> Self {
        Self {
            credential_provider,
            verifier,
            registrar,
            session_store,
            observer,
        }
    }

    /// Runs one sign-in and emits its result.
    ///
    /// Resolves once the result has been delivered to every subscriber.
    pub async fn sign_in(&self) {
        tracing::info!("Sign-in started");
        let result = self.reconcile().await;

        match &result {
            Ok(user) => tracing::info!(
                kind = user.kind(),
                user_id = %user.user_id(),
                "Sign-in completed"
            ),
            Err(e) => tracing::warn!(kind = e.kind(), error = %e, "Sign-in failed"),
        }

        self.observer.next(result);
    }

    async fn reconcile(&self) -> SignInResult {
        let provider = Provider::Google;

        // 1. Credential exchange; any failure here is unclassified
        tracing::debug!(provider = %provider, "Exchanging credential");
        let api_key = match self.credential_provider.sign_in_with(provider).await {
            Ok(api_key) => api_key,
            Err(e) => {
                tracing::warn!(provider = %provider, "Credential exchange failed: {}", e);
                return Err(SignInError::Unknown(UnknownError::core(e)));
            }
        };

        // 2. Session must be authenticated before the backend is reached
        self.session_store.write(Session::authenticated(api_key));

        // 3. Verify, signing up only unknown identities
        tracing::debug!("Verifying account");
        match self.verifier.verify().await {
            Ok(verified) => Ok(SignedInUser::from(verified)),
            Err(VerifyError::UserNotFound) => {
                tracing::debug!("No account yet, signing up");
                self.create_account().await
            }
            Err(e @ (VerifyError::VerifyFailed | VerifyError::Unknown(_))) => {
                tracing::warn!("Verify failed: {}", e);
                Err(SignInError::Unknown(UnknownError::core(e)))
            }
        }
    }

    async fn create_account(&self) -> SignInResult {
        match self.registrar.sign_up().await {
            Ok(created) => Ok(SignedInUser::from(created)),
            // AlreadyExist means the account appeared after verify; it is
            // reported like any other failure rather than re-verified.
            Err(
                e @ (SignUpError::AlreadyExist
                | SignUpError::Rejected { .. }
                | SignUpError::Unknown(_)),
            ) => {
                tracing::warn!("Sign-up failed: {}", e);
                Err(SignInError::Unknown(UnknownError::core(e)))
            }
        }
    }
}
