//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the sign-in core and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `CredentialProvider` - Identity provider credential exchange
//! - `AccountVerifier` - Backend lookup of the current bearer identity
//! - `AccountRegistrar` - Backend account creation
//!
//! ## State and Notification Ports
//!
//! - `SessionStore` - Current session and request configuration
//! - `Observer` - Push sink for sign-in outcomes

mod account_registrar;
mod account_verifier;
mod credential_provider;
mod observer;
mod session_store;

pub use account_registrar::AccountRegistrar;
pub use account_verifier::AccountVerifier;
pub use credential_provider::CredentialProvider;
pub use observer::Observer;
pub use session_store::SessionStore;
