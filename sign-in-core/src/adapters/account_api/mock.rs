//! Mock account API adapters for testing.
//!
//! `MockAccountVerifier` and `MockAccountRegistrar` return a fixed outcome
//! and count their calls. Both can observe a session store at call time,
//! which lets tests check that the session was written before the backend
//! was reached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::session::Session;
use crate::domain::sign_in::{SignUpError, SignedUpUser, VerifiedUser, VerifyError};
use crate::ports::{AccountRegistrar, AccountVerifier, SessionStore};

/// Records the session seen at each call.
#[derive(Default)]
struct SessionRecorder {
    store: Option<Arc<dyn SessionStore>>,
    seen: Mutex<Vec<Session>>,
}

impl SessionRecorder {
    fn record(&self) {
        if let Some(store) = &self.store {
            self.seen
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(store.read());
        }
    }

    fn seen(&self) -> Vec<Session> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Mock `verify` call.
pub struct MockAccountVerifier {
    outcome: Result<VerifiedUser, VerifyError>,
    calls: AtomicUsize,
    recorder: SessionRecorder,
}

impl MockAccountVerifier {
    /// Verification succeeds: the identity already has account `user_id`.
    pub fn existing(user_id: &str) -> Self {
        Self::with_outcome(Ok(VerifiedUser {
            user_id: UserId::new(user_id),
        }))
    }

    /// Verification fails with `error`.
    pub fn failing(error: VerifyError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<VerifiedUser, VerifyError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            recorder: SessionRecorder::default(),
        }
    }

    /// Records `store.read()` at every call.
    pub fn observing(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.recorder.store = Some(store);
        self
    }

    /// Returns how many times `verify` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns the sessions observed at each call.
    pub fn sessions_seen(&self) -> Vec<Session> {
        self.recorder.seen()
    }
}

#[async_trait]
impl AccountVerifier for MockAccountVerifier {
    async fn verify(&self) -> Result<VerifiedUser, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorder.record();
        self.outcome.clone()
    }
}

/// Mock `sign_up` call.
pub struct MockAccountRegistrar {
    outcome: Result<SignedUpUser, SignUpError>,
    calls: AtomicUsize,
    recorder: SessionRecorder,
}

impl MockAccountRegistrar {
    /// Sign-up succeeds with the given account.
    pub fn creating(user_id: &str, name: impl Into<String>) -> Self {
        Self::with_outcome(Ok(SignedUpUser {
            user_id: UserId::new(user_id),
            name: name.into(),
        }))
    }

    /// Sign-up fails with `error`.
    pub fn failing(error: SignUpError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<SignedUpUser, SignUpError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            recorder: SessionRecorder::default(),
        }
    }

    /// Records `store.read()` at every call.
    pub fn observing(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.recorder.store = Some(store);
        self
    }

    /// Returns how many times `sign_up` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns the sessions observed at each call.
    pub fn sessions_seen(&self) -> Vec<Session> {
        self.recorder.seen()
    }
}

#[async_trait]
impl AccountRegistrar for MockAccountRegistrar {
    async fn sign_up(&self) -> Result<SignedUpUser, SignUpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorder.record();
        self.outcome.clone()
    }
}
