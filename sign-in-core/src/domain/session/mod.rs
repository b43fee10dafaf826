//! Session module - in-memory authentication state.
//!
//! A process holds exactly one `Session`. It starts `Unauthenticated`, is
//! written once per successful credential exchange, and is read whenever
//! an outgoing account API request needs its bearer token.

mod api_key;
mod errors;
mod state;

pub use api_key::ApiKey;
pub use errors::NotAuthenticated;
pub use state::{ApiConfig, Session};
