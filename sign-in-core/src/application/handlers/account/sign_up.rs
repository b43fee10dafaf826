//! SignUpHandler - Stand-alone account creation user action.
//!
//! Calls the backend once and pushes its raw outcome to the observer,
//! without touching the session.

use std::sync::Arc;

use crate::domain::sign_in::{SignUpError, SignedUpUser};
use crate::ports::{AccountRegistrar, Observer};

/// Outcome of a stand-alone sign-up.
pub type SignUpOutcome = Result<SignedUpUser, SignUpError>;

/// Handler for the sign-up user action.
pub struct SignUpHandler {
    registrar: Arc<dyn AccountRegistrar>,
    observer: Arc<dyn Observer<SignUpOutcome>>,
}

impl SignUpHandler {
    pub fn new(
        registrar: Arc<dyn AccountRegistrar>,
        observer: Arc<dyn Observer<SignUpOutcome>>,
    ) -> Self {
        Self {
            registrar,
            observer,
        }
    }

    /// Creates the account and emits the backend's answer unchanged.
    pub async fn sign_up(&self) {
        let outcome = self.registrar.sign_up().await;

        match &outcome {
            Ok(user) => tracing::info!(user_id = %user.user_id, "Account created"),
            Err(e) => tracing::warn!("Account creation failed: {}", e),
        }

        self.observer.next(outcome);
    }
}
