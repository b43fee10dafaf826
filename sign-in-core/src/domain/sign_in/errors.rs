//! Sign-in error types.
//!
//! Each backend call returns its own sum of domain failures plus
//! `Unknown` for anything that could not be classified. The orchestrator
//! only distinguishes `VerifyError::UserNotFound`; everything else reaches
//! observers as a core unknown error that keeps the original failure.

use thiserror::Error;

use super::SignedInUser;
use crate::domain::foundation::UnknownError;

/// Terminal outcome of one sign-in run.
pub type SignInResult = Result<SignedInUser, SignInError>;

/// The identity provider did not hand out a credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The provider rejected the exchange (popup closed, network, ...).
    #[error("{0}")]
    Rejected(String),

    /// The provider answered without a token.
    #[error("token is required (actual: null)")]
    MissingToken,
}

impl CredentialError {
    /// Creates a rejection with a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        CredentialError::Rejected(message.into())
    }
}

/// Failures of the backend `verify` call.
#[derive(Debug, Clone, Error)]
pub enum VerifyError {
    /// The backend could not verify the bearer credential.
    #[error("Verification failed")]
    VerifyFailed,

    /// The credential is valid but no account exists yet.
    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Unknown(#[from] UnknownError),
}

/// Failures of the backend `sign_up` call.
#[derive(Debug, Clone, Error)]
pub enum SignUpError {
    /// An account was created for this identity since it was verified.
    #[error("User already exists")]
    AlreadyExist,

    /// Any other rejection reported by the backend.
    #[error("Sign-up rejected ({kind}): {key}")]
    Rejected { kind: String, key: String },

    #[error(transparent)]
    Unknown(#[from] UnknownError),
}

/// Error half of a [`SignInResult`].
#[derive(Debug, Clone, Error)]
pub enum SignInError {
    /// Typed verify failure. Never emitted by `SignInHandler`, which wraps it in `Unknown`.
    #[error("Verify failed: {0}")]
    Verify(VerifyError),

    /// Typed sign-up failure. Never emitted by `SignInHandler`, which wraps it in `Unknown`.
    #[error("Sign-up failed: {0}")]
    SignUp(SignUpError),

    #[error(transparent)]
    Unknown(#[from] UnknownError),
}

impl SignInError {
    /// Returns the kind discriminant observers branch on.
    pub fn kind(&self) -> &'static str {
        match self {
            SignInError::Verify(_) => "verify-error",
            SignInError::SignUp(_) => "sign-up-error",
            SignInError::Unknown(e) => e.kind(),
        }
    }

    /// Returns the wrapped unknown error, if that is what this is.
    pub fn as_unknown(&self) -> Option<&UnknownError> {
        match self {
            SignInError::Unknown(e) => Some(e),
            SignInError::Verify(_) | SignInError::SignUp(_) => None,
        }
    }
}
