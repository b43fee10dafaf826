//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Discriminant of unknown errors raised by the sign-in core itself.
pub const CORE_UNKNOWN_ERROR: &str = "core:unknown-error";

/// Discriminant of unknown errors raised by the account API client.
pub const API_CLIENT_UNKNOWN_ERROR: &str = "api-client:unknown-error";

/// Catch-all failure carrying the original cause.
///
/// Raised whenever a response fails schema validation or something
/// unexpected happens. The `kind` tells which layer gave up on classifying
/// the failure; the cause is kept intact for diagnostics and reachable
/// through [`Error::source`].
#[derive(Clone)]
pub struct UnknownError {
    kind: &'static str,
    cause: Arc<dyn Error + Send + Sync>,
}

impl UnknownError {
    /// Wraps a cause the sign-in core could not classify.
    pub fn core<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: CORE_UNKNOWN_ERROR,
            cause: Arc::new(cause),
        }
    }

    /// Wraps a transport or schema failure of the account API client.
    pub fn api_client<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: API_CLIENT_UNKNOWN_ERROR,
            cause: Arc::new(cause),
        }
    }

    /// Returns the kind discriminant.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the original causing error.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }
}

impl fmt::Debug for UnknownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnknownError")
            .field("kind", &self.kind)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for UnknownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.cause)
    }
}

impl Error for UnknownError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}
