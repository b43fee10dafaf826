//! Domain layer containing sign-in types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, provider ids, errors)
//! - `session` - In-memory authentication state and request configuration
//! - `sign_in` - Sign-in outcomes and the error sums of each backend call

pub mod foundation;
pub mod session;
pub mod sign_in;
