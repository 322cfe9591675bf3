//! Route definitions for the VFX Supervisor/Director dashboard.

use axum::routing::post;
use axum::Router;

use crate::handlers::operations;
use crate::state::AppState;

/// Routes mounted at `/creative`.
///
/// ```text
/// POST /asset_status   -> update_asset_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/asset_status", post(operations::update_asset_status))
}
