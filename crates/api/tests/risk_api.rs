//! HTTP-level tests for the Producer/CEO risk meter.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json_auth};
use serde_json::{json, Value};

async fn risk(body: Value) -> (StatusCode, Value) {
    let app = common::build_test_app(None);
    let response = post_json_auth(
        app,
        "/api/ceo/risk_meter",
        &common::token_for("Producer/CEO"),
        body,
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn moderate_slip_is_yellow() {
    let (status, json) =
        risk(json!({ "days_behind": 1, "cost_variance_pct": 5, "complexity_score": 70 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let analysis = &json["risk_analysis"];
    assert_eq!(analysis["status"], "YELLOW");
    assert_eq!(analysis["risk_score"], 54);
    assert!(analysis["suggestion"].as_str().unwrap().starts_with("CAUTION:"));
}

#[tokio::test]
async fn heavy_slip_is_red() {
    let (_, json) =
        risk(json!({ "days_behind": 6, "cost_variance_pct": 20, "complexity_score": 95 })).await;

    assert_eq!(json["risk_analysis"]["status"], "RED");
    assert_eq!(json["risk_analysis"]["risk_score"], 95);
}

#[tokio::test]
async fn on_track_is_green_and_numeric_strings_are_accepted() {
    let (_, json) =
        risk(json!({ "days_behind": "0", "cost_variance_pct": " 2 ", "complexity_score": 60.0 }))
            .await;

    assert_eq!(json["risk_analysis"]["status"], "GREEN");
    assert_eq!(json["risk_analysis"]["risk_score"], 32);
    assert_eq!(
        json["risk_analysis"]["suggestion"],
        "Project is on track. Maintain current efficiency and monitor daily progress reports closely."
    );
}

#[tokio::test]
async fn non_numeric_input_is_scored_as_error() {
    let (status, json) =
        risk(json!({ "days_behind": "abc", "cost_variance_pct": 5, "complexity_score": 70 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["risk_analysis"]["status"], "Error");
    assert_eq!(json["risk_analysis"]["risk_score"], 0);
    assert_eq!(
        json["risk_analysis"]["suggestion"],
        "Invalid input data. All inputs must be numeric."
    );
}

#[tokio::test]
async fn null_input_is_scored_as_error() {
    let (status, json) =
        risk(json!({ "days_behind": null, "cost_variance_pct": 5, "complexity_score": 70 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["risk_analysis"]["status"], "Error");
}

#[tokio::test]
async fn missing_field_is_400() {
    let (status, json) = risk(json!({ "days_behind": 1, "cost_variance_pct": 5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing AI input data");
}

#[tokio::test]
async fn non_object_body_is_400() {
    let (status, json) = risk(json!([1, 5, 70])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn line_producer_cannot_read_risk() {
    let app = common::build_test_app(None);
    let response = post_json_auth(
        app,
        "/api/ceo/risk_meter",
        &common::token_for("Line Producer"),
        json!({ "days_behind": 1, "cost_variance_pct": 5, "complexity_score": 70 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
