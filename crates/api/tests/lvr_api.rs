//! HTTP-level tests for Localized Vendor Ratings.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth};
use sqlx::PgPool;

#[tokio::test]
async fn without_store_the_built_in_list_is_served() {
    let app = common::build_test_app(None);
    let response = get_auth(app, "/api/lp/lvr", &common::token_for("Line Producer")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let vendors = json["vendors"].as_array().unwrap();
    assert_eq!(vendors.len(), 4);
    assert_eq!(vendors[0]["name"], "Prime Camera Rentals");
    assert!(vendors[0]["type"].is_string());
    assert!(vendors[0].get("vendor_type").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_is_seeded_on_first_read(pool: PgPool) {
    let app = common::build_test_app(Some(pool.clone()));
    let response = get_auth(app, "/api/lp/lvr", &common::token_for("Producer/CEO")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["vendors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Prime Camera Rentals",
            "VFX Nexus Studios",
            "Kerala Lights Crew",
            "South Sound Design"
        ]
    );
    assert_eq!(shotweave_db::repositories::VendorRepo::count(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn closed_store_falls_back_to_built_in_list(pool: PgPool) {
    pool.close().await;
    let app = common::build_test_app(Some(pool));
    let response = get_auth(app, "/api/lp/lvr", &common::token_for("Line Producer")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["vendors"].as_array().unwrap().len(), 4);
}
