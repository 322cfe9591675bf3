//! Route definitions for the Producer/CEO dashboard.

use axum::routing::post;
use axum::Router;

use crate::handlers::risk;
use crate::state::AppState;

/// Routes mounted at `/ceo`.
///
/// ```text
/// POST /risk_meter   -> risk_meter
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/risk_meter", post(risk::risk_meter))
}
