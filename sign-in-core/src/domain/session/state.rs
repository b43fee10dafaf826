//! Session state and the request configuration derived from it.

use super::{ApiKey, NotAuthenticated};

/// Current authentication state of the process.
///
/// # Invariants
///
/// - Starts as `Unauthenticated`
/// - Only ever moves forward to `Authenticated`; never reverts in-process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { api_key: ApiKey },
}

impl Session {
    /// Creates an authenticated session for the given credential.
    pub fn authenticated(api_key: ApiKey) -> Self {
        Session::Authenticated { api_key }
    }

    /// Returns true once a credential has been exchanged.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Returns the bearer credential, if any.
    pub fn api_key(&self) -> Option<&ApiKey> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated { api_key } => Some(api_key),
        }
    }

    /// Validates a transition from this state to another.
    ///
    /// Valid transitions:
    /// - Unauthenticated -> Authenticated
    /// - Authenticated -> Authenticated (a later exchange replaces the token)
    pub fn can_transition_to(&self, target: &Session) -> bool {
        match (self, target) {
            (_, Session::Authenticated { .. }) => true,
            (Session::Unauthenticated, Session::Unauthenticated) => true,
            (Session::Authenticated { .. }, Session::Unauthenticated) => false,
        }
    }

    /// Builds the outbound request configuration for the account API.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` while no credential has been exchanged.
    pub fn build_config(&self, host: &str) -> Result<ApiConfig, NotAuthenticated> {
        match self {
            Session::Unauthenticated => Err(NotAuthenticated),
            Session::Authenticated { api_key } => Ok(ApiConfig {
                host: host.to_string(),
                authorization_token: api_key.clone(),
            }),
        }
    }
}

/// Configuration carried by every outgoing account API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the account API.
    pub host: String,
    /// Bearer token sent in the `Authorization` header.
    pub authorization_token: ApiKey,
}
