//! Handlers for on-set reporting: Daily Progress Reports from the executor
//! dashboard and asset status changes from the creative dashboard.

use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use shotweave_core::operations::{
    AssetStatusUpdate, DailyProgressReport, ASSET_MISSING_FIELDS, DPR_LOGGED_MESSAGE,
    DPR_MISSING_FIELDS,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireCreative, RequireExecutor};
use crate::request::AppJson;
use crate::response::MessageResponse;

/// Request body for `POST /api/executor/dpr_submit`.
#[derive(Debug, Deserialize)]
pub struct DprRequest {
    pub scenes_shot: Option<Value>,
    pub daily_spend: Option<Value>,
    pub delay_minutes: Option<Value>,
    /// Name of the submitter; defaults to the authenticated username.
    pub user: Option<String>,
}

/// Request body for `POST /api/creative/asset_status`.
#[derive(Debug, Deserialize)]
pub struct AssetStatusRequest {
    pub asset_id: Option<Value>,
    pub new_status: Option<Value>,
}

/// POST /api/executor/dpr_submit
pub async fn submit_dpr(
    RequireExecutor(user): RequireExecutor,
    AppJson(input): AppJson<DprRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(scenes_shot), Some(daily_spend), Some(delay_minutes)) =
        (input.scenes_shot, input.daily_spend, input.delay_minutes)
    else {
        return Err(AppError::BadRequest(DPR_MISSING_FIELDS.into()));
    };

    let submitter = input.user.as_deref().unwrap_or(&user.username);
    let report = DailyProgressReport::from_json(
        &scenes_shot,
        &daily_spend,
        &delay_minutes,
        Some(submitter),
    )?;

    tracing::info!(
        user_id = user.user_id,
        submitted_by = %report.submitted_by,
        scenes_shot = report.scenes_shot,
        daily_spend = report.daily_spend,
        delay_minutes = report.delay_minutes,
        "Daily Progress Report received"
    );

    Ok(Json(MessageResponse::ok(DPR_LOGGED_MESSAGE)))
}

/// POST /api/creative/asset_status
pub async fn update_asset_status(
    RequireCreative(user): RequireCreative,
    AppJson(input): AppJson<AssetStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (Some(asset_id), Some(new_status)) = (input.asset_id, input.new_status) else {
        return Err(AppError::BadRequest(ASSET_MISSING_FIELDS.into()));
    };

    let update = AssetStatusUpdate::from_json(&asset_id, &new_status)?;

    tracing::info!(
        user_id = user.user_id,
        asset_id = %update.asset_id,
        new_status = %update.new_status,
        "Asset status updated"
    );

    Ok(Json(MessageResponse::ok(update.confirmation())))
}
