//! Integration tests for the auth session controller.
//!
//! The demo bypass and offline registration only trigger on
//! availability-class failures, so these tests run against a port with no
//! listener and against a wiremock backend returning real rejections.

use assert_matches::assert_matches;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geosentinel::client::fallback::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_TOKEN};
use geosentinel::client::{ApiClient, ApiError, AuthController, ClientConfig, Session, SessionStore};
use geosentinel::shared::api::RegisterRequest;
use geosentinel::shared::models::UserProfile;

fn controller_for(uri: &str) -> AuthController {
    let client = ApiClient::new(ClientConfig::new(uri), SessionStore::in_memory());
    AuthController::new(client)
}

fn unreachable_controller() -> AuthController {
    controller_for("http://127.0.0.1:1")
}

fn stored_session() -> Session {
    Session {
        token: "persisted-token".to_string(),
        user: UserProfile {
            id: "user-9".to_string(),
            name: "Returning User".to_string(),
            email: "returning@example.com".to_string(),
            organization: None,
            role: "user".to_string(),
            phone: None,
        },
    }
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        name: "New Scientist".to_string(),
        email: "scientist@example.com".to_string(),
        password: "long-enough-password".to_string(),
        organization: Some("NIH Roorkee".to_string()),
        phone: None,
    }
}

#[tokio::test]
async fn test_demo_bypass_on_unreachable_backend() {
    let auth = unreachable_controller();
    auth.initialize();

    let user = auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    assert_eq!(user.email, DEMO_EMAIL);
    assert!(auth.is_authenticated());
    let state = auth.snapshot();
    assert!(state.is_authenticated);
    assert_eq!(state.user.unwrap().name, "Dr. Demo User");
}

#[tokio::test]
async fn test_wrong_demo_password_propagates_network_error() {
    let auth = unreachable_controller();

    let result = auth.login(DEMO_EMAIL, "not-the-demo-password").await;

    assert_matches!(result, Err(ApiError::NetworkError));
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_non_demo_email_propagates_network_error() {
    let auth = unreachable_controller();

    let result = auth.login("someone@example.com", DEMO_PASSWORD).await;

    assert_matches!(result, Err(ApiError::NetworkError));
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_demo_bypass_stores_demo_token() {
    let client = ApiClient::new(
        ClientConfig::new("http://127.0.0.1:1"),
        SessionStore::in_memory(),
    );
    let auth = AuthController::new(client.clone());

    auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

    let session = client.session().get().unwrap();
    assert_eq!(session.token, DEMO_TOKEN);
}

#[tokio::test]
async fn test_demo_bypass_requires_availability_failure() {
    // A live backend rejecting the credentials is not an availability
    // failure; the bypass must not mask it.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let auth = controller_for(&server.uri());
    let result = auth.login(DEMO_EMAIL, DEMO_PASSWORD).await;

    assert_matches!(result, Err(ApiError::AuthRequired));
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_offline_registration_fabricates_identity() {
    let auth = unreachable_controller();

    let user = auth.register(&register_request()).await.unwrap();

    assert_eq!(user.email, "scientist@example.com");
    assert_eq!(user.name, "New Scientist");
    assert!(user.id.starts_with("demo-user-"));
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn test_offline_registration_can_be_disabled() {
    let auth = unreachable_controller().with_offline_registration(false);

    let result = auth.register(&register_request()).await;

    assert_matches!(result, Err(ApiError::NetworkError));
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_registration_validation_always_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "User already exists", "status": 400 })),
        )
        .mount(&server)
        .await;

    let auth = controller_for(&server.uri());
    let result = auth.register(&register_request()).await;

    assert_eq!(
        result,
        Err(ApiError::Validation("User already exists".to_string()))
    );
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_refresh_confirms_live_session() {
    let server = MockServer::start().await;
    let mut confirmed = stored_session().user;
    confirmed.name = "Dr. Returning User".to_string();
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&confirmed))
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientConfig::new(&server.uri()), SessionStore::in_memory());
    client.session().set(stored_session());
    let auth = AuthController::new(client);

    let user = auth.refresh().await.unwrap();

    assert_eq!(user.name, "Dr. Returning User");
    assert!(auth.is_initialized());
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn test_refresh_keeps_cached_identity_when_unreachable() {
    let client = ApiClient::new(
        ClientConfig::new("http://127.0.0.1:1"),
        SessionStore::in_memory(),
    );
    client.session().set(stored_session());
    let auth = AuthController::new(client);

    let user = auth.refresh().await.unwrap();

    assert_eq!(user.email, "returning@example.com");
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn test_refresh_ends_session_on_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientConfig::new(&server.uri()), SessionStore::in_memory());
    client.session().set(stored_session());
    let auth = AuthController::new(client);

    assert!(auth.refresh().await.is_none());
    assert!(auth.is_initialized());
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn test_refresh_without_session_is_none() {
    let auth = unreachable_controller();
    assert!(auth.refresh().await.is_none());
    assert!(auth.is_initialized());
}

#[tokio::test]
async fn test_logout_after_demo_login() {
    let auth = unreachable_controller();
    auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    assert!(auth.is_authenticated());

    auth.logout();

    assert!(!auth.is_authenticated());
    assert!(auth.snapshot().user.is_none());
}
