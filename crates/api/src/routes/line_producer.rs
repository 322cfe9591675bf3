//! Route definitions for the Line Producer dashboard.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{breakdown, vendors};
use crate::state::AppState;

/// Routes mounted at `/lp`. Requires `Line Producer` or `Producer/CEO`.
///
/// ```text
/// POST /breakdown          -> analyze_text
/// POST /breakdown/upload   -> analyze_upload (multipart)
/// GET  /lvr                -> list_vendors
/// ```
///
/// Only the upload route lifts axum's default body limit, up to
/// `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/breakdown", post(breakdown::analyze_text))
        .route(
            "/breakdown/upload",
            post(breakdown::analyze_upload)
                .layer::<_, std::convert::Infallible>(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_upload_bytes)),
        )
        .route("/lvr", get(vendors::list_vendors))
}
