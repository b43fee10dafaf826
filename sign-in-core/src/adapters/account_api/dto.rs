//! Wire DTOs of the account API.
//!
//! These types decouple the JSON bodies from domain types. Deserialization
//! is the schema check: a body that does not fit is an unknown error.

use serde::Deserialize;

use crate::domain::foundation::UserId;
use crate::domain::sign_in::{SignedUpUser, VerifiedUser};

/// Error kind: the bearer credential could not be verified.
pub const KIND_VERIFY_FAILED: &str = "verify_failed";
/// Error kind: the credential is valid but has no account.
pub const KIND_USER_NOT_FOUND: &str = "user_not_found";
/// Error kind: an account already exists for the credential.
pub const KIND_ALREADY_EXIST: &str = "already_exist";

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful `POST /verify` body.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub id: UserId,
}

impl From<VerifyResponse> for VerifiedUser {
    fn from(response: VerifyResponse) -> Self {
        VerifiedUser {
            user_id: response.id,
        }
    }
}

/// Successful `POST /sign_up` body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpResponse {
    pub user_id: UserId,
    pub name: String,
}

impl From<SignUpResponse> for SignedUpUser {
    fn from(response: SignUpResponse) -> Self {
        SignedUpUser {
            user_id: response.user_id,
            name: response.name,
        }
    }
}

/// Body of every 4xx/5xx answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub key: String,
}
