//! Session-specific error types.

use thiserror::Error;

/// The session store was asked for request configuration before any
/// credential was exchanged.
///
/// This is a caller-ordering bug, not a runtime condition: it never
/// surfaces through a sign-in result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Session is not authenticated")]
pub struct NotAuthenticated;
