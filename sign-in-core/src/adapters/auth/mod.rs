//! Credential provider adapters.
//!
//! Implementations of the `CredentialProvider` port:
//!
//! - `static_provider` - Pre-obtained ID token from configuration
//! - `mock` - Test implementation recording every exchange

mod mock;
mod static_provider;

pub use mock::MockCredentialProvider;
pub use static_provider::StaticCredentialProvider;
