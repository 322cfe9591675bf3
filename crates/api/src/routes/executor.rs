//! Route definitions for the 1st AD/Unit Manager dashboard.

use axum::routing::post;
use axum::Router;

use crate::handlers::operations;
use crate::state::AppState;

/// Routes mounted at `/executor`.
///
/// ```text
/// POST /dpr_submit   -> submit_dpr
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/dpr_submit", post(operations::submit_dpr))
}
