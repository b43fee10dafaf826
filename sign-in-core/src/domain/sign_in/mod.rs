//! Sign-in module - outcomes and failures of the reconciliation flow.

mod errors;
mod user;

pub use errors::{CredentialError, SignInError, SignInResult, SignUpError, VerifyError};
pub use user::{SignedInUser, SignedUpUser, VerifiedUser};
