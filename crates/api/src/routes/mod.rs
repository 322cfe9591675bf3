pub mod auth;
pub mod creative;
pub mod executor;
pub mod health;
pub mod line_producer;
pub mod producer;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /signup                      register (public)
/// /login                       login (public)
///
/// /lp/breakdown                analyze pasted script text
/// /lp/breakdown/upload         analyze an uploaded script document
/// /lp/lvr                      vendor ratings
///
/// /ceo/risk_meter              project risk score
///
/// /executor/dpr_submit         daily progress report
///
/// /creative/asset_status       VFX asset status change
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/lp", line_producer::router(config.max_upload_bytes))
        .nest("/ceo", producer::router())
        .nest("/executor", executor::router())
        .nest("/creative", creative::router())
}
