//! `sign-in` - runs one sign-in against the configured account API.
//!
//! Exits with status 0 when a user was signed in (new or existing) and 1
//! otherwise.

use std::process::ExitCode;

use sign_in_core::app::{SignInApp, StartupError};
use sign_in_core::config::AppConfig;
use sign_in_core::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("sign-in: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool, StartupError> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.log);

    let app = SignInApp::for_production(&config)?;

    let _subscription = app.signed_in().subscribe(|result| match result {
        Ok(user) => tracing::info!(
            kind = user.kind(),
            user_id = %user.user_id(),
            "Signed in"
        ),
        Err(e) => tracing::error!(kind = e.kind(), error = %e, "Sign-in failed"),
    });

    app.sign_in().await;

    Ok(matches!(app.signed_in().last(), Some(Ok(_))))
}
