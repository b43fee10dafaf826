//! Session store port - process-wide authentication state.

use crate::domain::session::{ApiConfig, NotAuthenticated, Session};

/// Holds the single current [`Session`].
///
/// Only the sign-in orchestrator writes; any number of readers may call
/// `read` and `build_config` concurrently. All operations are synchronous.
pub trait SessionStore: Send + Sync {
    /// Returns the latest session. Before any write this is `Unauthenticated`.
    fn read(&self) -> Session;

    /// Replaces the current session and notifies subscribers.
    ///
    /// No validation is performed; callers only move the session forward.
    fn write(&self, session: Session);

    /// Builds the account API request configuration from the current session.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` if called before a credential was exchanged.
    fn build_config(&self) -> Result<ApiConfig, NotAuthenticated>;
}
