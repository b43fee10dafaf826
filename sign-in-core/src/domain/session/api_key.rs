//! Bearer credential issued by the identity provider.

use secrecy::{ExposeSecret, Secret};
use std::fmt;
use subtle::ConstantTimeEq;

/// Opaque bearer token obtained from the identity provider.
///
/// Held as a secret so it never leaks through `Debug` output or logs.
/// Equality is constant-time.
#[derive(Clone)]
pub struct ApiKey(Secret<String>);

impl ApiKey {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Exposes the raw token (for building request headers).
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<Secret<String>> for ApiKey {
    fn from(secret: Secret<String>) -> Self {
        Self(secret)
    }
}

impl PartialEq for ApiKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret()
            .as_bytes()
            .ct_eq(other.expose_secret().as_bytes())
            .into()
    }
}

impl Eq for ApiKey {}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}
