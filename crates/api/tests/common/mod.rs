//! Shared helpers for the HTTP integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! so no TCP listener is involved. Each helper consumes the router; build a
//! fresh one per request with [`build_test_app`].

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use quintet_api::auth::jwt::JwtConfig;
use quintet_api::auth::TokenVerifier;
use quintet_api::config::ServerConfig;
use quintet_api::router::build_app_router;
use quintet_api::state::AppState;

/// HS256 secret shared by the test verifier and [`token_with`].
pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hs256";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig::hs256(TEST_SECRET),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through the same [`build_app_router`] as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let verifier =
        TokenVerifier::from_config(&config.jwt).expect("HS256 test config must be valid");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        verifier: Arc::new(verifier),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

fn sign(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// A valid token granting exactly `permissions`.
pub fn token_with(permissions: &[&str]) -> String {
    sign(json!({
        "sub": "test|user",
        "exp": chrono::Utc::now().timestamp() + 3600,
        "permissions": permissions,
    }))
}

/// A token that expired well past the verifier's leeway.
pub fn expired_token(permissions: &[&str]) -> String {
    sign(json!({
        "sub": "test|user",
        "exp": chrono::Utc::now().timestamp() - 600,
        "permissions": permissions,
    }))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send one request. `body` is encoded as JSON; `token` becomes a bearer header.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
