//! Account API adapters.
//!
//! Implementations of the `AccountVerifier` and `AccountRegistrar` ports:
//!
//! - `http_client` - reqwest client for the JSON account API
//! - `mock` - Test implementations with call counting
//! - `dto` - Wire formats of the account API

mod dto;
mod http_client;
mod mock;

pub use dto::{ErrorResponse, SignUpResponse, VerifyResponse};
pub use http_client::{HttpAccountApi, ResponseError};
pub use mock::{MockAccountRegistrar, MockAccountVerifier};
