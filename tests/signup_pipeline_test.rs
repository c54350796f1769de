//! Signup pipeline unit tests over mocked collaborators.

use std::sync::Arc;

use relay_auth::domain::{Password, SignupRequest, User};
use relay_auth::errors::{ChatError, ResponseStatus};
use relay_auth::infra::{MockUserRepository, UserSummary};
use relay_auth::services::{AuthenticateResponse, MockAuthService, Registrar, SignUpService};
use uuid::Uuid;

fn request(username: &str, password: &str, name: &str) -> SignupRequest {
    SignupRequest {
        username: username.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    }
}

fn session(user_id: Uuid) -> AuthenticateResponse {
    AuthenticateResponse {
        user_id,
        session_id: Uuid::new_v4(),
        token: "signed-session-token".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 86400,
    }
}

#[tokio::test]
async fn invalid_input_never_reaches_the_store_or_auth() {
    // No expectations set: any call on either collaborator panics the test
    let repo = MockUserRepository::new();
    let auth = MockAuthService::new();

    let service = Registrar::new(Arc::new(repo), Arc::new(auth));
    let result = service.signup(request("ab", "short", "")).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ChatError::Validation(_)));
    assert_eq!(err.status(), ResponseStatus::ValidationError);
}

#[tokio::test]
async fn successful_signup_returns_the_minted_session() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .withf(|email, username| email.is_none() && username == "carol")
        .returning(|_, _| Ok(vec![]));
    repo.expect_create()
        .withf(|user: &User| user.username == "carol" && user.name == "Carol")
        .returning(|user| Ok(user));

    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        .withf(|req| req.username == "carol" && req.password == "pw12345!")
        .returning(|_| Ok(session(Uuid::new_v4())));

    let service = Registrar::new(Arc::new(repo), Arc::new(auth));
    let response = service
        .signup(request("carol", "pw12345!", "Carol"))
        .await
        .unwrap();

    assert_eq!(response.token, "signed-session-token");
    assert_eq!(response.token_type, "Bearer");
}

#[tokio::test]
async fn username_is_normalized_before_store_and_auth() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .withf(|_, username| username == "alice")
        .returning(|_, _| Ok(vec![]));
    repo.expect_create()
        .withf(|user: &User| user.username == "alice")
        .returning(|user| Ok(user));

    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        // Stored username, original plaintext
        .withf(|req| req.username == "alice" && req.password == "pw12345!")
        .returning(|_| Ok(session(Uuid::new_v4())));

    let service = Registrar::new(Arc::new(repo), Arc::new(auth));
    assert!(service
        .signup(request("Alice", "pw12345!", "Alice"))
        .await
        .is_ok());
}

#[tokio::test]
async fn persisted_digest_is_hashed_and_verifiable() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .returning(|_, _| Ok(vec![]));
    repo.expect_create()
        .withf(|user: &User| {
            user.password_digest != "pw12345!"
                && Password::from_digest(user.password_digest.clone()).verify("pw12345!")
        })
        .returning(|user| Ok(user));

    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        .returning(|_| Ok(session(Uuid::new_v4())));

    let service = Registrar::new(Arc::new(repo), Arc::new(auth));
    assert!(service
        .signup(request("carol", "pw12345!", "Carol"))
        .await
        .is_ok());
}

#[tokio::test]
async fn duplicate_precheck_aborts_before_create() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .withf(|_, username| username == "carol")
        .returning(|_, username| {
            Ok(vec![UserSummary {
                id: Uuid::new_v4(),
                email: None,
                username: username.to_string(),
            }])
        });
    // No expect_create, no expect_authenticate: neither may be called

    let auth = MockAuthService::new();
    let service = Registrar::new(Arc::new(repo), Arc::new(auth));

    let err = service
        .signup(request("carol", "pw12345!", "Carol"))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Conflict(_)));
}

#[tokio::test]
async fn insert_time_conflict_propagates_without_authentication() {
    // The pre-check misses (concurrent signup); the unique index reports the
    // conflict at insert time and the pipeline stops there.
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .returning(|_, _| Ok(vec![]));
    repo.expect_create()
        .times(1)
        .returning(|_| Err(ChatError::conflict("Username already taken")));

    let auth = MockAuthService::new();
    let service = Registrar::new(Arc::new(repo), Arc::new(auth));

    let err = service
        .signup(request("carol", "pw12345!", "Carol"))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Conflict(_)));
}

#[tokio::test]
async fn store_fault_is_server_class() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .returning(|_, _| Ok(vec![]));
    repo.expect_create()
        .returning(|_| Err(ChatError::server("store unavailable")));

    let auth = MockAuthService::new();
    let service = Registrar::new(Arc::new(repo), Arc::new(auth));

    let err = service
        .signup(request("carol", "pw12345!", "Carol"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), ResponseStatus::ServerError);
}

#[tokio::test]
async fn auth_failure_after_persist_is_authentication_class() {
    // The row exists after create; a failed re-authentication still returns
    // an error and nothing is rolled back.
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username_or_email()
        .returning(|_, _| Ok(vec![]));
    repo.expect_create().times(1).returning(|user| Ok(user));

    let mut auth = MockAuthService::new();
    auth.expect_authenticate()
        .times(1)
        .returning(|_| Err(ChatError::InvalidCredentials));

    let service = Registrar::new(Arc::new(repo), Arc::new(auth));
    let err = service
        .signup(request("bob", "Secr3t!pw", "Bob"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), ResponseStatus::AuthenticationError);
}
