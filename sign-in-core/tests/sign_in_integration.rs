//! Integration tests for the sign-in orchestration.
//!
//! Every run is wired through `SignInApp` with mock ports and a real
//! in-memory session store, then checked for:
//! 1. The emitted result for each verify/sign-up branch
//! 2. Which backend calls were made
//! 3. Exactly one emission per run

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use sign_in_core::adapters::{
    InMemorySessionStore, MockAccountRegistrar, MockAccountVerifier, MockCredentialProvider,
};
use sign_in_core::app::SignInApp;
use sign_in_core::domain::foundation::{UnknownError, UserId, CORE_UNKNOWN_ERROR};
use sign_in_core::domain::session::{ApiKey, Session};
use sign_in_core::domain::sign_in::{
    CredentialError, SignInError, SignInResult, SignUpError, SignedInUser, VerifyError,
};
use sign_in_core::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

const HOST: &str = "https://account.example.com";

struct Harness {
    app: SignInApp,
    store: Arc<InMemorySessionStore>,
    verifier: Arc<MockAccountVerifier>,
    registrar: Arc<MockAccountRegistrar>,
    emitted: Arc<Mutex<Vec<SignInResult>>>,
}

impl Harness {
    fn new(
        provider: MockCredentialProvider,
        verifier: MockAccountVerifier,
        registrar: MockAccountRegistrar,
    ) -> Self {
        let store = Arc::new(InMemorySessionStore::new(HOST));
        let verifier = Arc::new(verifier.observing(store.clone()));
        let registrar = Arc::new(registrar.observing(store.clone()));
        let app = SignInApp::new(
            Arc::new(provider),
            verifier.clone(),
            registrar.clone(),
            store.clone(),
        );

        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let _subscription = app
            .signed_in()
            .subscribe(move |result| sink.lock().unwrap().push(result.clone()));

        Self {
            app,
            store,
            verifier,
            registrar,
            emitted,
        }
    }

    async fn run(&self) -> SignInResult {
        self.app.sign_in().await;
        let emitted = self.emitted.lock().unwrap();
        assert_eq!(emitted.len(), 1, "expected exactly one emission per run");
        emitted[0].clone()
    }
}

fn user_id(id: &str) -> UserId {
    UserId::new(id)
}

fn transport_failure(message: &str) -> UnknownError {
    UnknownError::api_client(CredentialError::rejected(message))
}

fn assert_core_unknown(result: &SignInResult) {
    match result {
        Err(SignInError::Unknown(e)) => assert_eq!(e.kind(), CORE_UNKNOWN_ERROR),
        other => panic!("expected core unknown error, got {:?}", other),
    }
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[tokio::test]
async fn new_user_is_signed_up_and_session_is_authenticated() {
    let harness = Harness::new(
        MockCredentialProvider::with_token("tok-A"),
        MockAccountVerifier::failing(VerifyError::UserNotFound),
        MockAccountRegistrar::creating("xxx", "yyyy"),
    );

    let result = harness.run().await;

    let user = result.unwrap();
    assert_eq!(
        user,
        SignedInUser::NewUser {
            user_id: user_id("xxx"),
            name: "yyyy".to_string(),
        }
    );
    assert_eq!(
        serde_json::to_value(&user).unwrap(),
        serde_json::json!({"kind": "NewUser", "userId": "xxx", "name": "yyyy"})
    );
    assert_eq!(
        harness.store.read(),
        Session::authenticated(ApiKey::new("tok-A"))
    );
}

#[tokio::test]
async fn credential_rejection_is_reported_without_backend_calls() {
    let harness = Harness::new(
        MockCredentialProvider::with_error(CredentialError::rejected("network-down")),
        MockAccountVerifier::existing("foo"),
        MockAccountRegistrar::creating("xxx", "yyyy"),
    );

    let result = harness.run().await;

    match &result {
        Err(SignInError::Unknown(e)) => {
            assert_eq!(e.kind(), CORE_UNKNOWN_ERROR);
            assert_eq!(e.cause().to_string(), "network-down");
        }
        other => panic!("expected core unknown error, got {:?}", other),
    }
    assert_eq!(harness.store.read(), Session::Unauthenticated);
    assert_eq!(harness.verifier.call_count(), 0);
    assert_eq!(harness.registrar.call_count(), 0);
}

// =============================================================================
// Branch Coverage
// =============================================================================

#[tokio::test]
async fn existing_user_matches_verified_id() {
    let harness = Harness::new(
        MockCredentialProvider::with_token("tok-A"),
        MockAccountVerifier::existing("foo"),
        MockAccountRegistrar::creating("xxx", "yyyy"),
    );

    let result = harness.run().await;

    assert_eq!(
        result.unwrap(),
        SignedInUser::ExistingUser {
            user_id: user_id("foo")
        }
    );
    assert_eq!(harness.registrar.call_count(), 0);
}

#[tokio::test]
async fn every_sign_up_failure_becomes_unknown_error() {
    let failures = vec![
        SignUpError::AlreadyExist,
        SignUpError::Rejected {
            kind: "verify_failed".to_string(),
            key: "expired".to_string(),
        },
        SignUpError::Unknown(transport_failure("12")),
    ];

    for failure in failures {
        let harness = Harness::new(
            MockCredentialProvider::with_token("tok-A"),
            MockAccountVerifier::failing(VerifyError::UserNotFound),
            MockAccountRegistrar::failing(failure),
        );

        let result = harness.run().await;

        assert_core_unknown(&result);
        assert_eq!(harness.registrar.call_count(), 1);
    }
}

#[tokio::test]
async fn verify_failures_other_than_user_not_found_skip_sign_up() {
    let failures = vec![
        VerifyError::VerifyFailed,
        VerifyError::Unknown(transport_failure("timeout")),
    ];

    for failure in failures {
        let harness = Harness::new(
            MockCredentialProvider::with_token("tok-A"),
            MockAccountVerifier::failing(failure),
            MockAccountRegistrar::creating("xxx", "yyyy"),
        );

        let result = harness.run().await;

        assert_core_unknown(&result);
        assert_eq!(harness.verifier.call_count(), 1);
        assert_eq!(harness.registrar.call_count(), 0);
    }
}

#[tokio::test]
async fn backend_calls_see_the_new_session() {
    let harness = Harness::new(
        MockCredentialProvider::with_token("tok-A"),
        MockAccountVerifier::failing(VerifyError::UserNotFound),
        MockAccountRegistrar::creating("xxx", "yyyy"),
    );

    let _ = harness.run().await;

    let expected = Session::authenticated(ApiKey::new("tok-A"));
    assert_eq!(harness.verifier.sessions_seen(), vec![expected.clone()]);
    assert_eq!(harness.registrar.sessions_seen(), vec![expected]);
}

#[tokio::test]
async fn session_subscribers_see_initial_and_authenticated_states() {
    let harness = Harness::new(
        MockCredentialProvider::with_token("tok-A"),
        MockAccountVerifier::existing("foo"),
        MockAccountRegistrar::creating("xxx", "yyyy"),
    );
    let changes = Arc::new(AtomicUsize::new(0));
    let authenticated = Arc::new(AtomicUsize::new(0));
    let (c, a) = (Arc::clone(&changes), Arc::clone(&authenticated));
    let _subscription = harness.store.subscribe(move |session| {
        c.fetch_add(1, Ordering::SeqCst);
        if session.is_authenticated() {
            a.fetch_add(1, Ordering::SeqCst);
        }
    });

    let _ = harness.run().await;

    assert_eq!(changes.load(Ordering::SeqCst), 2);
    assert_eq!(authenticated.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn late_subscriber_does_not_receive_previous_result() {
    let harness = Harness::new(
        MockCredentialProvider::with_token("tok-A"),
        MockAccountVerifier::existing("foo"),
        MockAccountRegistrar::creating("xxx", "yyyy"),
    );
    let _ = harness.run().await;

    let late = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&late);
    let _subscription = harness.app.signed_in().subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(late.load(Ordering::SeqCst), 0);
    assert!(harness.app.signed_in().last().is_some());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum VerifyOutcome {
    Existing(String),
    NotFound,
    Failed,
    Transport,
}

#[derive(Debug, Clone)]
enum SignUpOutcome {
    Created(String, String),
    AlreadyExist,
    Rejected,
    Transport,
}

fn id_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{0,24}"
}

fn verify_strategy() -> impl Strategy<Value = VerifyOutcome> {
    prop_oneof![
        id_strategy().prop_map(VerifyOutcome::Existing),
        Just(VerifyOutcome::NotFound),
        Just(VerifyOutcome::Failed),
        Just(VerifyOutcome::Transport),
    ]
}

fn sign_up_strategy() -> impl Strategy<Value = SignUpOutcome> {
    prop_oneof![
        (id_strategy(), "[a-z ]{0,16}").prop_map(|(id, name)| SignUpOutcome::Created(id, name)),
        Just(SignUpOutcome::AlreadyExist),
        Just(SignUpOutcome::Rejected),
        Just(SignUpOutcome::Transport),
    ]
}

fn verifier_for(outcome: &VerifyOutcome) -> MockAccountVerifier {
    match outcome {
        VerifyOutcome::Existing(id) => MockAccountVerifier::existing(id),
        VerifyOutcome::NotFound => MockAccountVerifier::failing(VerifyError::UserNotFound),
        VerifyOutcome::Failed => MockAccountVerifier::failing(VerifyError::VerifyFailed),
        VerifyOutcome::Transport => {
            MockAccountVerifier::failing(VerifyError::Unknown(transport_failure("reset")))
        }
    }
}

fn registrar_for(outcome: &SignUpOutcome) -> MockAccountRegistrar {
    match outcome {
        SignUpOutcome::Created(id, name) => MockAccountRegistrar::creating(id, name.clone()),
        SignUpOutcome::AlreadyExist => MockAccountRegistrar::failing(SignUpError::AlreadyExist),
        SignUpOutcome::Rejected => MockAccountRegistrar::failing(SignUpError::Rejected {
            kind: "forbidden".to_string(),
            key: String::new(),
        }),
        SignUpOutcome::Transport => {
            MockAccountRegistrar::failing(SignUpError::Unknown(transport_failure("reset")))
        }
    }
}

proptest! {
    #[test]
    fn outcome_follows_backend_answers(
        token in "[A-Za-z0-9.]{1,40}",
        verify in verify_strategy(),
        sign_up in sign_up_strategy(),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let harness = Harness::new(
            MockCredentialProvider::with_token(token.clone()),
            verifier_for(&verify),
            registrar_for(&sign_up),
        );

        let result = runtime.block_on(harness.run());

        prop_assert_eq!(harness.store.read(), Session::authenticated(ApiKey::new(token)));
        prop_assert_eq!(harness.verifier.call_count(), 1);

        match (&verify, &sign_up) {
            (VerifyOutcome::Existing(id), _) => {
                prop_assert_eq!(
                    result.unwrap(),
                    SignedInUser::ExistingUser { user_id: user_id(id) }
                );
                prop_assert_eq!(harness.registrar.call_count(), 0);
            }
            (VerifyOutcome::NotFound, SignUpOutcome::Created(id, name)) => {
                prop_assert_eq!(
                    result.unwrap(),
                    SignedInUser::NewUser { user_id: user_id(id), name: name.clone() }
                );
                prop_assert_eq!(harness.registrar.call_count(), 1);
            }
            (VerifyOutcome::NotFound, _) => {
                prop_assert_eq!(result.unwrap_err().kind(), CORE_UNKNOWN_ERROR);
                prop_assert_eq!(harness.registrar.call_count(), 1);
            }
            (VerifyOutcome::Failed | VerifyOutcome::Transport, _) => {
                prop_assert_eq!(result.unwrap_err().kind(), CORE_UNKNOWN_ERROR);
                prop_assert_eq!(harness.registrar.call_count(), 0);
            }
        }
    }
}
