//! Composition root.
//!
//! `SignInApp` owns the session store and the result subjects, and wires
//! the handlers to them. Callers read outcomes from the subjects (the read
//! models) and trigger the user actions through `sign_in` / `sign_up`.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::{HttpAccountApi, InMemorySessionStore, StaticCredentialProvider, Subject};
use crate::application::{SignInHandler, SignUpHandler, SignUpOutcome};
use crate::config::{AppConfig, ConfigError, ValidationError};
use crate::domain::sign_in::SignInResult;
use crate::ports::{AccountRegistrar, AccountVerifier, CredentialProvider};

/// Errors that prevent the application from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Wired sign-in application.
pub struct SignInApp {
    session_store: Arc<InMemorySessionStore>,
    signed_in: Subject<SignInResult>,
    signed_up: Subject<SignUpOutcome>,
    sign_in: SignInHandler,
    sign_up: SignUpHandler,
}

impl SignInApp {
    pub fn new(
        credential_provider: Arc<dyn CredentialProvider>,
        verifier: Arc<dyn AccountVerifier>,
        registrar: Arc<dyn AccountRegistrar>,
        session_store: Arc<InMemorySessionStore>,
    ) -> Self {
        let signed_in = Subject::new();
        let signed_up = Subject::new();

        let sign_in = SignInHandler::new(
            credential_provider,
            verifier,
            registrar.clone(),
            session_store.clone(),
            Arc::new(signed_in.clone()),
        );
        let sign_up = SignUpHandler::new(registrar, Arc::new(signed_up.clone()));

        Self {
            session_store,
            signed_in,
            signed_up,
            sign_in,
            sign_up,
        }
    }

    /// Wires the production adapters from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `StartupError` if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn for_production(config: &AppConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let session_store = Arc::new(InMemorySessionStore::new(config.api.host.clone()));
        let account_api = Arc::new(HttpAccountApi::new(
            session_store.clone(),
            config.api.request_timeout(),
        )?);
        let credential_provider = Arc::new(StaticCredentialProvider::new(
            config.provider.id_token.clone(),
        ));

        tracing::info!(
            host = %config.api.host,
            environment = ?config.environment,
            has_token = config.provider.has_token(),
            "Sign-in application wired"
        );

        Ok(Self::new(
            credential_provider,
            account_api.clone(),
            account_api,
            session_store,
        ))
    }

    /// Process-wide session store.
    pub fn session_store(&self) -> &Arc<InMemorySessionStore> {
        &self.session_store
    }

    /// Read model receiving one result per sign-in run.
    pub fn signed_in(&self) -> &Subject<SignInResult> {
        &self.signed_in
    }

    /// Read model receiving the raw outcome of each sign-up action.
    pub fn signed_up(&self) -> &Subject<SignUpOutcome> {
        &self.signed_up
    }

    /// Runs the sign-in user action.
    pub async fn sign_in(&self) {
        self.sign_in.sign_in().await
    }

    /// Runs the stand-alone sign-up user action.
    pub async fn sign_up(&self) {
        self.sign_up.sign_up().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockAccountRegistrar, MockAccountVerifier, MockCredentialProvider};
    use crate::config::{AccountApiConfig, Environment, LogConfig, ProviderConfig};
    use crate::domain::sign_in::{SignedInUser, VerifyError};
    use crate::ports::SessionStore;

    fn config(host: &str, environment: Environment) -> AppConfig {
        AppConfig {
            environment,
            api: AccountApiConfig {
                host: host.to_string(),
                request_timeout_secs: 30,
            },
            provider: ProviderConfig::default(),
            log: LogConfig::default(),
        }
    }

    #[tokio::test]
    async fn sign_in_publishes_to_signed_in_read_model() {
        let store = Arc::new(InMemorySessionStore::new("https://api.example.com"));
        let app = SignInApp::new(
            Arc::new(MockCredentialProvider::with_token("tok-A")),
            Arc::new(MockAccountVerifier::failing(VerifyError::UserNotFound)),
            Arc::new(MockAccountRegistrar::creating("xxx", "yyyy")),
            store,
        );

        app.sign_in().await;

        assert!(matches!(
            app.signed_in().last(),
            Some(Ok(SignedInUser::NewUser { .. }))
        ));
        assert!(app.signed_up().last().is_none());
        assert!(app.session_store().read().is_authenticated());
    }

    #[tokio::test]
    async fn sign_up_publishes_to_signed_up_read_model_only() {
        let registrar = Arc::new(MockAccountRegistrar::creating("xxx", "yyyy"));
        let app = SignInApp::new(
            Arc::new(MockCredentialProvider::with_token("tok-A")),
            Arc::new(MockAccountVerifier::existing("xxx")),
            registrar.clone(),
            Arc::new(InMemorySessionStore::new("https://api.example.com")),
        );

        app.sign_up().await;

        assert_eq!(app.signed_up().last().unwrap().unwrap().name, "yyyy");
        assert!(app.signed_in().last().is_none());
        assert!(!app.session_store().read().is_authenticated());
        assert_eq!(registrar.call_count(), 1);
    }

    #[test]
    fn for_production_wires_from_valid_config() {
        let config = config("https://api.example.com", Environment::Production);
        let app = SignInApp::for_production(&config).unwrap();
        assert_eq!(app.session_store().api_host(), "https://api.example.com");
        assert!(!app.session_store().read().is_authenticated());
    }

    #[test]
    fn for_production_rejects_invalid_config() {
        let config = config("http://api.example.com", Environment::Production);
        let result = SignInApp::for_production(&config);
        assert!(matches!(
            result,
            Err(StartupError::Validation(ValidationError::ApiHostMustBeHttps))
        ));
    }

    #[test]
    fn load_and_validation_failures_stay_distinct() {
        let load = StartupError::from(ConfigError::from(::config::ConfigError::NotFound(
            "api".to_string(),
        )));
        assert!(matches!(load, StartupError::Config(ConfigError::LoadError(_))));

        let validation = StartupError::from(ValidationError::InvalidTimeout);
        assert!(matches!(
            validation,
            StartupError::Validation(ValidationError::InvalidTimeout)
        ));
    }

    #[tokio::test]
    async fn production_sign_in_without_token_reports_missing_token() {
        let config = config("https://api.example.com", Environment::Development);
        let app = SignInApp::for_production(&config).unwrap();

        app.sign_in().await;

        let error = app.signed_in().last().unwrap().unwrap_err();
        assert_eq!(error.kind(), crate::domain::foundation::CORE_UNKNOWN_ERROR);
        assert_eq!(
            error.as_unknown().unwrap().cause().to_string(),
            "token is required (actual: null)"
        );
    }
}
