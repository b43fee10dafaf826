//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! sign-in domain.

mod errors;
mod ids;
mod provider;

pub use errors::{UnknownError, API_CLIENT_UNKNOWN_ERROR, CORE_UNKNOWN_ERROR};
pub use ids::UserId;
pub use provider::Provider;
