#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use shotweave_api::auth::jwt::{generate_access_token, JwtConfig};
use shotweave_api::config::{DatabaseConfig, ServerConfig};
use shotweave_api::router::build_app_router;
use shotweave_api::state::AppState;
use shotweave_core::risk::RiskModel;

/// Boundary used by [`multipart_body`].
const BOUNDARY: &str = "shotweave-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 64 * 1024,
        database: DatabaseConfig {
            url: None,
            connect_attempts: 1,
            retry_delay_secs: 0,
        },
        risk_model_path: None,
        jwt: JwtConfig {
            secret: "shotweave-integration-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router, with or without a database pool.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// under test is the production one.
pub fn build_test_app(pool: Option<PgPool>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        risk_model: Arc::new(RiskModel::trained().expect("risk model should train")),
    };
    build_app_router(state, &config)
}

/// A valid bearer token for a user holding `role`.
pub fn token_for(role: &str) -> String {
    generate_access_token(1, "test-crew", role, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Body::empty(), None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        None,
        Body::from(body.to_string()),
        Some("application/json"),
    )
    .await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Some(token),
        Body::from(body.to_string()),
        Some("application/json"),
    )
    .await
}

/// POST a raw body with an explicit content type and `Content-Length`.
pub async fn post_raw_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: impl Into<Vec<u8>>,
    content_type: &str,
) -> Response<Body> {
    let body = body.into();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a single-file multipart form under `field`.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    token: &str,
    field: &str,
    filename: &str,
    contents: &[u8],
) -> Response<Body> {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    post_raw_auth(
        app,
        uri,
        token,
        multipart_body(field, filename, contents),
        &content_type,
    )
    .await
}

/// Encode one file part as a `multipart/form-data` body.
pub fn multipart_body(field: &str, filename: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
