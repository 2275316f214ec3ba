//! Router-level tests for the backend.
//!
//! Built without a database pool: middleware behavior, the JSON error
//! envelope, and the 503 degradation of data routes are all observable
//! from the router alone.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use geosentinel::backend::auth::sessions::{issue_token, JwtKeys};
use geosentinel::backend::routes::create_router;
use geosentinel::backend::server::state::AppState;

const TEST_SECRET: &str = "router-test-secret";

fn test_app() -> Router<()> {
    let state = AppState::new(None, JwtKeys::new(TEST_SECRET), false);
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn bearer_token() -> String {
    let keys = JwtKeys::new(TEST_SECRET);
    issue_token(&keys, Uuid::new_v4(), "router@example.com").unwrap()
}

#[tokio::test]
async fn test_protected_route_rejects_missing_token() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/api/aois").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/api/aois")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    // With no pool configured the handler answers 503, which proves the
    // request got past the middleware.
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/api/aois")
                .header(header::AUTHORIZATION, format!("Bearer {}", bearer_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_valid_token_reaches_handler() {
    // 503 rather than 401: the middleware accepted the token and the
    // handler ran far enough to miss the pool.
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", bearer_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_cookie_token_accepted() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/api/reports")
                .header(header::COOKIE, format!("auth-token={}", bearer_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_login_without_pool_answers_503() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email":"a@b.com","password":"password123"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Database not configured");
}

#[tokio::test]
async fn test_unknown_route_gets_json_404() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_register_is_public() {
    // Reaches the handler without a token; 503 because there is no pool,
    // not 401.
    let app = test_app();
    let response = app
        .oneshot(
            Request::post("/api/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"A","email":"a@b.com","password":"password123","organization":null,"phone":null}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
