//! In-memory session store.
//!
//! Holds the process-wide session in a `BehaviorSubject`, so the initial
//! `Unauthenticated` value is always observable and subscribers are told
//! about every write.

use crate::adapters::events::{BehaviorSubject, Subscription};
use crate::domain::session::{ApiConfig, NotAuthenticated, Session};
use crate::ports::SessionStore;

/// Process-lifetime session store.
///
/// # Example
///
/// ```ignore
/// let store = InMemorySessionStore::new("https://account.example.com");
/// assert!(store.build_config().is_err());
///
/// store.write(Session::authenticated(ApiKey::new("id-token")));
/// let config = store.build_config()?;
/// ```
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    state: BehaviorSubject<Session>,
    api_host: String,
}

impl InMemorySessionStore {
    /// Creates an unauthenticated store targeting the given account API host.
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            state: BehaviorSubject::new(Session::Unauthenticated),
            api_host: api_host.into(),
        }
    }

    /// Returns the account API host requests are built for.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Registers a handler for session changes.
    ///
    /// The current session is replayed to the handler immediately.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.state.subscribe(handler)
    }
}

impl SessionStore for InMemorySessionStore {
    fn read(&self) -> Session {
        self.state.value()
    }

    fn write(&self, session: Session) {
        let current = self.state.value();
        if !current.can_transition_to(&session) {
            tracing::warn!(
                from_authenticated = current.is_authenticated(),
                "Session write moves backwards"
            );
        }
        tracing::debug!(authenticated = session.is_authenticated(), "Session updated");
        self.state.next(session);
    }

    fn build_config(&self) -> Result<ApiConfig, NotAuthenticated> {
        self.state.value().build_config(&self.api_host)
    }
}
