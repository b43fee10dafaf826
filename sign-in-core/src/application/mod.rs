//! Application layer - User-action handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers never return their outcome; they push it to an observer.

pub mod handlers;

pub use handlers::{SignInHandler, SignUpHandler, SignUpOutcome};
