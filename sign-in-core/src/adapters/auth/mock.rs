//! Mock credential provider for testing.
//!
//! Implements the `CredentialProvider` port without an identity provider,
//! recording every exchange so tests can assert on call counts.
//!
//! # Example
//!
//! ```ignore
//! use sign_in_core::adapters::auth::MockCredentialProvider;
//! use sign_in_core::domain::sign_in::CredentialError;
//!
//! let ok = MockCredentialProvider::with_token("tok-A");
//! let failing = MockCredentialProvider::with_error(CredentialError::rejected("network-down"));
//!
//! // ... run a sign-in ...
//! assert_eq!(ok.call_count(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::Provider;
use crate::domain::session::ApiKey;
use crate::domain::sign_in::CredentialError;
use crate::ports::CredentialProvider;

/// Mock credential provider returning a fixed outcome.
#[derive(Debug)]
pub struct MockCredentialProvider {
    outcome: Result<ApiKey, CredentialError>,
    calls: AtomicUsize,
    requested: Mutex<Vec<Provider>>,
}

impl MockCredentialProvider {
    /// Creates a provider whose exchanges succeed with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_outcome(Ok(ApiKey::new(token)))
    }

    /// Creates a provider whose exchanges fail with `error`.
    pub fn with_error(error: CredentialError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<ApiKey, CredentialError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Returns how many exchanges were attempted.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns the providers requested, in call order.
    pub fn requested_providers(&self) -> Vec<Provider> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CredentialProvider for MockCredentialProvider {
    async fn sign_in_with(&self, provider: Provider) -> Result<ApiKey, CredentialError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(provider);
        self.outcome.clone()
    }
}
