//! Account application handlers.
//!
//! User actions that establish who the signed-in user is.

mod sign_in;
mod sign_up;

pub use sign_in::SignInHandler;
pub use sign_up::{SignUpHandler, SignUpOutcome};
