//! Handler for the Producer/CEO risk meter.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use shotweave_core::risk::{self, RiskResult, RiskStatus};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireProducer;
use crate::request::AppJson;
use crate::state::AppState;

/// Inputs the risk meter requires, in model order.
const RISK_FIELDS: [&str; 3] = ["days_behind", "cost_variance_pct", "complexity_score"];

#[derive(Debug, Serialize)]
pub struct RiskMeterResponse {
    pub success: bool,
    pub risk_analysis: RiskResult,
}

/// POST /api/ceo/risk_meter
///
/// A missing field is a 400. A present but non-numeric field (including
/// `null`) is scored as status `Error` with a 200.
pub async fn risk_meter(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    AppJson(body): AppJson<Map<String, Value>>,
) -> AppResult<Json<RiskMeterResponse>> {
    let [days_behind, cost_variance_pct, complexity_score] = RISK_FIELDS.map(|key| body.get(key));
    let (Some(days_behind), Some(cost_variance_pct), Some(complexity_score)) =
        (days_behind, cost_variance_pct, complexity_score)
    else {
        return Err(AppError::BadRequest("Missing AI input data".into()));
    };

    let analysis = risk::score(
        &state.risk_model,
        days_behind,
        cost_variance_pct,
        complexity_score,
    );

    if analysis.status == RiskStatus::Error {
        tracing::warn!(user_id = user.user_id, suggestion = %analysis.suggestion, "Risk input rejected");
    } else {
        tracing::info!(
            user_id = user.user_id,
            risk_score = analysis.risk_score,
            status = ?analysis.status,
            "Risk meter evaluated"
        );
    }

    Ok(Json(RiskMeterResponse {
        success: true,
        risk_analysis: analysis,
    }))
}
