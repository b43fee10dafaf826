//! Identity provider identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Third-party identity provider a credential is obtained from.
///
/// Google is the only supported provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
}

impl Provider {
    /// Returns the wire identifier of the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
