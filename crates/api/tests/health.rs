//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[tokio::test]
async fn health_without_store_reports_degraded() {
    let app = common::build_test_app(None);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_connected"], false);
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_with_store_reports_ok(pool: PgPool) {
    let app = common::build_test_app(Some(pool));
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_connected"], true);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(None);
    let response = get(app, "/api/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_carries_generated_request_id() {
    let app = common::build_test_app(None);
    let response = get(app, "/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("response must contain x-request-id")
        .to_str()
        .unwrap();
    assert_eq!(id.len(), 36, "request id should be a hyphenated UUID");
}

#[tokio::test]
async fn client_request_id_is_propagated() {
    let app = common::build_test_app(None);
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "call-sheet-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "call-sheet-42");
}

#[tokio::test]
async fn cors_preflight_allows_dev_origin() {
    let app = common::build_test_app(None);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/login")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}
