//! HTTP account API client.
//!
//! Implements `AccountVerifier` and `AccountRegistrar` as JSON-over-HTTPS
//! calls authorized with the bearer token of the current session.
//!
//! # Endpoints
//!
//! | call      | request            | 2xx body                 | error body       |
//! |-----------|--------------------|--------------------------|------------------|
//! | `verify`  | `POST {host}/verify`  | `{"id"}`              | `{"kind","key"}` |
//! | `sign_up` | `POST {host}/sign_up` | `{"user_id","name"}`  | `{"kind","key"}` |
//!
//! One attempt per call; failures are reported, never retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::dto::{
    ErrorResponse, SignUpResponse, VerifyResponse, KIND_ALREADY_EXIST, KIND_USER_NOT_FOUND,
    KIND_VERIFY_FAILED,
};
use crate::domain::foundation::UnknownError;
use crate::domain::session::{ApiConfig, ApiKey, NotAuthenticated};
use crate::domain::sign_in::{SignUpError, SignedUpUser, VerifiedUser, VerifyError};
use crate::ports::{AccountRegistrar, AccountVerifier, SessionStore};

const VERIFY_PATH: &str = "verify";
const SIGN_UP_PATH: &str = "sign_up";

/// Failures the client could not classify; always surfaced as
/// `api-client:unknown-error`.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Account API called before sign-in: {0}")]
    NotAuthenticated(#[from] NotAuthenticated),

    #[error("Invalid account API host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response does not match schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Unexpected error kind '{kind}' (key: {key})")]
    UnexpectedKind { kind: String, key: String },
}

/// Raw answer of the account API.
#[derive(Debug)]
struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

/// reqwest-backed account API client.
pub struct HttpAccountApi {
    client: Client,
    session_store: Arc<dyn SessionStore>,
}

impl HttpAccountApi {
    /// Creates a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the HTTP client cannot be built.
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, session_store))
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(client: Client, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            client,
            session_store,
        }
    }

    async fn post(&self, path: &str) -> Result<RawResponse, ResponseError> {
        let config = self.session_store.build_config().map_err(|e| {
            tracing::error!(path, "Account API called before a credential was exchanged");
            e
        })?;
        let url = endpoint(&config, path)?;

        tracing::debug!(%url, "Calling account API");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization_header(&config.authorization_token))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(path, "Account API request failed: {}", e);
                e
            })?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(path, status = status.as_u16(), "Account API responded");

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl AccountVerifier for HttpAccountApi {
    async fn verify(&self) -> Result<VerifiedUser, VerifyError> {
        let response = self
            .post(VERIFY_PATH)
            .await
            .map_err(|e| VerifyError::Unknown(UnknownError::api_client(e)))?;
        parse_verify_response(response.status, &response.body)
    }
}

#[async_trait]
impl AccountRegistrar for HttpAccountApi {
    async fn sign_up(&self) -> Result<SignedUpUser, SignUpError> {
        let response = self
            .post(SIGN_UP_PATH)
            .await
            .map_err(|e| SignUpError::Unknown(UnknownError::api_client(e)))?;
        parse_sign_up_response(response.status, &response.body)
    }
}

/// Builds `{host}/{path}`; the path replaces whatever path the host carries.
fn endpoint(config: &ApiConfig, path: &str) -> Result<Url, ResponseError> {
    let mut url = Url::parse(&config.host).map_err(|e| ResponseError::InvalidHost {
        host: config.host.clone(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ResponseError::InvalidHost {
            host: config.host.clone(),
            reason: "URL cannot be a base".to_string(),
        });
    }
    url.set_path(path);
    Ok(url)
}

/// The account API expects `Bearer:` with a trailing colon.
fn authorization_header(token: &ApiKey) -> String {
    format!("Bearer: {}", token.expose_secret())
}

fn parse_verify_response(status: StatusCode, body: &[u8]) -> Result<VerifiedUser, VerifyError> {
    if status.is_success() {
        return serde_json::from_slice::<VerifyResponse>(body)
            .map(VerifiedUser::from)
            .map_err(|e| VerifyError::Unknown(UnknownError::api_client(ResponseError::from(e))));
    }

    let error: ErrorResponse = serde_json::from_slice(body)
        .map_err(|e| VerifyError::Unknown(UnknownError::api_client(ResponseError::from(e))))?;

    Err(match error.kind.as_str() {
        KIND_VERIFY_FAILED => VerifyError::VerifyFailed,
        KIND_USER_NOT_FOUND => VerifyError::UserNotFound,
        _ => VerifyError::Unknown(UnknownError::api_client(ResponseError::UnexpectedKind {
            kind: error.kind,
            key: error.key,
        })),
    })
}

fn parse_sign_up_response(status: StatusCode, body: &[u8]) -> Result<SignedUpUser, SignUpError> {
    if status.is_success() {
        return serde_json::from_slice::<SignUpResponse>(body)
            .map(SignedUpUser::from)
            .map_err(|e| SignUpError::Unknown(UnknownError::api_client(ResponseError::from(e))));
    }

    let error: ErrorResponse = serde_json::from_slice(body)
        .map_err(|e| SignUpError::Unknown(UnknownError::api_client(ResponseError::from(e))))?;

    Err(match error.kind.as_str() {
        KIND_ALREADY_EXIST => SignUpError::AlreadyExist,
        _ => SignUpError::Rejected {
            kind: error.kind,
            key: error.key,
        },
    })
}
