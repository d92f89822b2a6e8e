//! HTTP API integration tests
//!
//! Exercises the real router end to end with axum-test. The database pool
//! is created lazily and never connects, so every path covered here is one
//! that must not touch the store: the public welcome route, the auth
//! gate's rejections, and validation that has to fail before any write.

use axum::http::StatusCode;
use axum_test::TestServer;
use eventbook::auth::sessions::{issue_token, Claims};
use eventbook::routes::create_router;
use eventbook::server::config::AppConfig;
use eventbook::server::state::AppState;
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const TEST_SECRET: &str = "integration-test-secret";

/// Build a test server over the real router with a pool that never connects.
fn test_server() -> TestServer {
    let config = AppConfig {
        // Never dialed: the pool is lazy and these tests avoid the store
        database_url: "postgres://localhost:1/unreachable".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        port: 0,
    };
    let pool = PgPool::connect_lazy(&config.database_url).expect("lazy pool");
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    TestServer::new(create_router(state)).expect("test server")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Sign a claim with an arbitrary expiry, for expired-token cases.
fn token_with_expiry(secret: &str, iat: u64, exp: u64) -> String {
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("signed token")
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
async fn root_returns_plain_text_welcome() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Welcome!");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let server = test_server();

    let response = server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_without_token_is_401() {
    let server = test_server();

    let response = server.get("/dashboard").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No token provided");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn dashboard_with_non_bearer_scheme_is_401() {
    let server = test_server();

    let response = server
        .get("/dashboard")
        .add_header("authorization", "Basic YWw6cHc=".to_string())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_with_garbage_token_is_401() {
    let server = test_server();

    let response = server
        .get("/dashboard")
        .add_header("authorization", bearer("definitely.not.a.jwt"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn dashboard_with_expired_token_is_401() {
    let server = test_server();
    let now = unix_now();
    let token = token_with_expiry(TEST_SECRET, now - 172_800, now - 86_400);

    let response = server
        .get("/dashboard")
        .add_header("authorization", bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_with_token_from_other_secret_is_401() {
    let server = test_server();
    let token = issue_token(Uuid::new_v4(), "some-other-secret").unwrap();

    let response = server
        .get("/dashboard")
        .add_header("authorization", bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_with_valid_token_echoes_identity() {
    let server = test_server();
    let user_id = Uuid::new_v4();
    let token = issue_token(user_id, TEST_SECRET).unwrap();

    let response = server
        .get("/dashboard")
        .add_header("authorization", bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Welcome to the dashboard!");
    assert_eq!(body["user"]["user_id"], user_id.to_string());
}

#[tokio::test]
async fn list_events_without_token_is_401() {
    let server = test_server();

    let response = server.get("/events").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_event_without_token_is_401() {
    let server = test_server();

    let response = server
        .post("/events")
        .json(&serde_json::json!({
            "title": "standup",
            "date": "2026-08-30",
            "time": "09:00"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_event_with_missing_field_is_400_before_any_write() {
    let server = test_server();
    let token = issue_token(Uuid::new_v4(), TEST_SECRET).unwrap();

    // No date, no time: validation must fail before the store is touched
    let response = server
        .post("/events")
        .add_header("authorization", bearer(&token))
        .json(&serde_json::json!({ "title": "standup" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "All fields required");
}

#[tokio::test]
async fn create_event_with_empty_field_is_400() {
    let server = test_server();
    let token = issue_token(Uuid::new_v4(), TEST_SECRET).unwrap();

    let response = server
        .post("/events")
        .add_header("authorization", bearer(&token))
        .json(&serde_json::json!({
            "title": "   ",
            "date": "2026-08-30",
            "time": "09:00"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "All fields required");
}

#[tokio::test]
async fn signup_with_missing_fields_is_400_before_any_write() {
    let server = test_server();

    let response = server
        .post("/signup")
        .json(&serde_json::json!({ "username": "al" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "All fields required");
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let server = test_server();

    let response = server
        .get("/")
        .add_header("origin", "https://app.example.com")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "expected a CORS allow-origin header on a cross-origin request"
    );
}

#[tokio::test]
async fn malformed_json_body_uses_error_contract() {
    let server = test_server();

    let response = server
        .post("/signup")
        .text("{ this is not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_uses_error_contract() {
    let server = test_server();

    // Valid JSON text, but sent without application/json
    let response = server
        .post("/signin")
        .text(r#"{"email":"al@x.com","password":"pw"}"#)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn signin_with_missing_fields_is_400() {
    let server = test_server();

    let response = server
        .post("/signin")
        .json(&serde_json::json!({ "email": "al@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "All fields required");
}
