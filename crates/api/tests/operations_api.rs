//! HTTP-level tests for Daily Progress Reports and asset status updates.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json_auth};
use serde_json::json;

fn executor() -> String {
    common::token_for("1st AD/Unit Manager")
}

fn creative() -> String {
    common::token_for("VFX Supervisor/Director")
}

#[tokio::test]
async fn dpr_is_acknowledged() {
    let app = common::build_test_app(None);
    let body = json!({ "scenes_shot": 4, "daily_spend": 125000.5, "delay_minutes": 30, "user": "Kavya" });
    let response = post_json_auth(app, "/api/executor/dpr_submit", &executor(), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Daily Progress Report logged successfully.");
}

#[tokio::test]
async fn dpr_accepts_numeric_strings() {
    let app = common::build_test_app(None);
    let body = json!({ "scenes_shot": "3", "daily_spend": "98000", "delay_minutes": "15" });
    let response = post_json_auth(app, "/api/executor/dpr_submit", &executor(), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[tokio::test]
async fn dpr_non_numeric_figure_is_validation_error() {
    let app = common::build_test_app(None);
    let body = json!({ "scenes_shot": "three", "daily_spend": 1000, "delay_minutes": 0 });
    let response = post_json_auth(app, "/api/executor/dpr_submit", &executor(), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "scenes_shot must be a whole number, got \"three\"");
}

#[tokio::test]
async fn dpr_missing_field_is_400() {
    let app = common::build_test_app(None);
    let body = json!({ "scenes_shot": 4, "daily_spend": 1000 });
    let response = post_json_auth(app, "/api/executor/dpr_submit", &executor(), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "DPR missing required fields");
}

#[tokio::test]
async fn dpr_negative_spend_is_400() {
    let app = common::build_test_app(None);
    let body = json!({ "scenes_shot": 4, "daily_spend": -1, "delay_minutes": 0 });
    let response = post_json_auth(app, "/api/executor/dpr_submit", &executor(), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn creative_cannot_submit_dpr() {
    let app = common::build_test_app(None);
    let body = json!({ "scenes_shot": 4, "daily_spend": 1000, "delay_minutes": 0 });
    let response = post_json_auth(app, "/api/executor/dpr_submit", &creative(), body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn asset_status_is_confirmed() {
    let app = common::build_test_app(None);
    let body = json!({ "asset_id": "VFX-101", "new_status": "Approved" });
    let response = post_json_auth(app, "/api/creative/asset_status", &creative(), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Asset VFX-101 status updated to Approved."
    );
}

#[tokio::test]
async fn numeric_asset_id_is_accepted_by_producer() {
    let app = common::build_test_app(None);
    let body = json!({ "asset_id": 42, "new_status": "In Review" });
    let response = post_json_auth(
        app,
        "/api/creative/asset_status",
        &common::token_for("Producer/CEO"),
        body,
    )
    .await;

    assert_eq!(
        body_json(response).await["message"],
        "Asset 42 status updated to In Review."
    );
}

#[tokio::test]
async fn asset_status_missing_field_is_400() {
    let app = common::build_test_app(None);
    let response = post_json_auth(
        app,
        "/api/creative/asset_status",
        &creative(),
        json!({ "asset_id": "VFX-101" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Asset status update missing fields"
    );
}

#[tokio::test]
async fn blank_asset_status_is_400() {
    let app = common::build_test_app(None);
    let body = json!({ "asset_id": "VFX-101", "new_status": "  " });
    let response = post_json_auth(app, "/api/creative/asset_status", &creative(), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
