//! Integration tests for the Identity Toolkit gateway.
//!
//! Runs `IdentityClient` against a mock provider and checks request shape, response
//! decoding and the split between rejected and unexpected failures.

use std::sync::Arc;

use auth_screen::{
    App, AuthGateway, Field, GatewayError, IdentityClient, IdentityConfig, Mode, Notification,
    SubmitOutcome,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> IdentityClient {
    let config = IdentityConfig::new(API_KEY).with_base_url(format!("{}/v1", server.uri()));
    IdentityClient::new(config).expect("valid test config")
}

fn sign_in_body(email: &str, display_name: &str) -> serde_json::Value {
    json!({
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "uid-123",
        "email": email,
        "displayName": display_name,
        "idToken": "id-token",
        "refreshToken": "refresh-token",
        "expiresIn": "3600",
        "registered": true
    })
}

fn provider_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {
            "code": status,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": "invalid" }]
        }
    }))
}

#[tokio::test]
async fn test_authenticate_success() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", API_KEY))
        .and(body_partial_json(json!({
            "email": "a@b.com",
            "password": "secret1",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sign_in_body("a@b.com", "Ann")))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .authenticate("a@b.com", "secret1")
        .await
        .expect("sign-in succeeds");

    assert_eq!(user.uid, "uid-123");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.greeting_name(), "Ann");
    assert_eq!(user.id_token, "id-token");
    assert!(user.expires_at > chrono::Utc::now());
}

#[tokio::test]
async fn test_authenticate_rejected_maps_provider_code() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(provider_error(400, "INVALID_LOGIN_CREDENTIALS"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .authenticate("a@b.com", "wrong-password")
        .await
        .expect_err("sign-in is rejected");

    assert_eq!(err, GatewayError::Rejected("Invalid email or password".to_string()));
}

#[tokio::test]
async fn test_create_account_sets_display_name() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", API_KEY))
        .and(body_partial_json(json!({ "email": "ann@b.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-new",
            "email": "ann@b.com",
            "idToken": "fresh-id-token",
            "refreshToken": "fresh-refresh-token",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:update"))
        .and(body_partial_json(json!({
            "idToken": "fresh-id-token",
            "displayName": "Ann",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-new",
            "email": "ann@b.com",
            "displayName": "Ann",
            "idToken": "updated-id-token",
            "refreshToken": "updated-refresh-token",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .create_account("ann@b.com", "secret1", "Ann")
        .await
        .expect("sign-up succeeds");

    assert_eq!(user.uid, "uid-new");
    assert_eq!(user.display_name.as_deref(), Some("Ann"));
    assert_eq!(user.id_token, "updated-id-token");
    assert_eq!(user.refresh_token, "updated-refresh-token");
}

#[tokio::test]
async fn test_create_account_existing_email() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(provider_error(400, "EMAIL_EXISTS"))
        .mount(&server)
        .await;

    // No profile update after a failed sign-up.
    Mock::given(method("POST"))
        .and(path("/v1/accounts:update"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_account("ann@b.com", "secret1", "Ann")
        .await
        .expect_err("sign-up is rejected");

    assert_eq!(
        err,
        GatewayError::Rejected("An account with this email already exists".to_string())
    );
}

#[tokio::test]
async fn test_create_account_profile_update_rejected() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-new",
            "email": "ann@b.com",
            "idToken": "fresh-id-token",
            "refreshToken": "fresh-refresh-token",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:update"))
        .and(body_partial_json(json!({ "idToken": "fresh-id-token", "displayName": "Ann" })))
        .respond_with(provider_error(400, "INVALID_ID_TOKEN"))
        .expect(1)
        .mount(&server)
        .await;

    // The account now exists, but the submit still settles as failed.
    let err = client_for(&server)
        .create_account("ann@b.com", "secret1", "Ann")
        .await
        .expect_err("profile update is rejected");

    assert_eq!(
        err,
        GatewayError::Rejected("Your session has expired. Please sign in again".to_string())
    );
}

#[tokio::test]
async fn test_password_reset_request() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(query_param("key", API_KEY))
        .and(body_partial_json(json!({ "requestType": "PASSWORD_RESET", "email": "a@b.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "a@b.com" })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .request_password_reset("a@b.com")
        .await
        .expect("reset email requested");
}

#[tokio::test]
async fn test_unreadable_error_is_unexpected() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream error</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request_password_reset("a@b.com")
        .await
        .expect_err("reset fails");

    assert!(err.is_unexpected());
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn test_malformed_success_body_is_unexpected() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .authenticate("a@b.com", "secret1")
        .await
        .expect_err("decode fails");

    assert!(err.is_unexpected());
}

#[tokio::test]
async fn test_unreachable_provider_is_unexpected() {
    // Bind then drop a listener so the port is closed.
    let port = match std::net::TcpListener::bind("127.0.0.1:0").and_then(|l| l.local_addr()) {
        Ok(addr) => addr.port(),
        Err(_) => {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
    };
    let config = IdentityConfig::new(API_KEY).with_base_url(format!("http://127.0.0.1:{port}/v1"));
    let client = IdentityClient::new(config).expect("valid test config");

    let err = client
        .authenticate("a@b.com", "secret1")
        .await
        .expect_err("connection refused");

    assert!(err.is_unexpected());
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn test_form_login_through_http_gateway() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sign_in_body("a@b.com", "")))
        .expect(1)
        .mount(&server)
        .await;

    let mut app =
        App::with_mode(Arc::new(client_for(&server)), Vec::<Notification>::new(), Mode::Login);
    app.handle_field_change(Field::Email, "a@b.com".to_string());
    app.handle_field_change(Field::Password, "secret1".to_string());

    assert!(matches!(app.handle_submit(), SubmitOutcome::Started(_)));
    assert!(app.settle_next().await);

    assert!(!app.state.read().submitting);
    assert_eq!(
        app.state.read().current_user.as_ref().map(|u| u.greeting_name().to_string()),
        Some("a@b.com".to_string())
    );
    assert_eq!(app.notifier().len(), 1);
    assert_eq!(app.notifier()[0].title, "Welcome back!");
}
