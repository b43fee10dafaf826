//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the sign-in core to the outside world:
//! - `account_api` - Account API client (HTTP) and test doubles
//! - `auth` - Credential providers
//! - `events` - In-process notification channels
//! - `session` - Session store

pub mod account_api;
pub mod auth;
pub mod events;
pub mod session;

pub use account_api::{HttpAccountApi, MockAccountRegistrar, MockAccountVerifier};
pub use auth::{MockCredentialProvider, StaticCredentialProvider};
pub use events::{BehaviorSubject, Subject, Subscription};
pub use session::InMemorySessionStore;
