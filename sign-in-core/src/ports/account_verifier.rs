//! Account verifier port - "does this identity already have an account?"

use async_trait::async_trait;

use crate::domain::sign_in::{VerifiedUser, VerifyError};

/// Looks up the backend account of the currently configured bearer identity.
///
/// # Contract
///
/// Implementations must:
/// - Return the account id if the identity has an account
/// - Return `VerifyError::UserNotFound` if the credential is valid but unknown
/// - Return `VerifyError::VerifyFailed` if the backend rejects the credential
/// - Return `VerifyError::Unknown` for transport and schema failures
#[async_trait]
pub trait AccountVerifier: Send + Sync {
    async fn verify(&self) -> Result<VerifiedUser, VerifyError>;
}
