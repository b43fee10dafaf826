//! Application handlers.
//!
//! User-action handlers that orchestrate ports into one outcome each.

pub mod account;

pub use account::{SignInHandler, SignUpHandler, SignUpOutcome};
