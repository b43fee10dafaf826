//! Account registrar port - creates the backend account.

use async_trait::async_trait;

use crate::domain::sign_in::{SignUpError, SignedUpUser};

/// Creates a backend account for the currently configured bearer identity.
///
/// # Contract
///
/// Implementations must:
/// - Return the new account id and display name on success
/// - Return `SignUpError::AlreadyExist` if the identity already has an account
/// - Return `SignUpError::Rejected` for other backend rejections
/// - Return `SignUpError::Unknown` for transport and schema failures
#[async_trait]
pub trait AccountRegistrar: Send + Sync {
    async fn sign_up(&self) -> Result<SignedUpUser, SignUpError>;
}
