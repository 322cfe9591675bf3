//! Handlers for script breakdown on the Line Producer dashboard.

use axum::extract::Multipart;
use axum::Json;
use serde::{Deserialize, Serialize};
use shotweave_core::breakdown::{self, BreakdownResult};
use shotweave_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::extract::{self as document, ExtractError};
use crate::middleware::rbac::RequireLineProducer;
use crate::request::AppJson;

/// Multipart field carrying the uploaded script.
const UPLOAD_FIELD: &str = "file";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/lp/breakdown`.
#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    pub script_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub success: bool,
    /// Name of the uploaded document, for upload requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub breakdown: BreakdownResult,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/lp/breakdown
///
/// Analyze pasted script text. An empty or absent `script_text` is a 400;
/// whitespace-only text is analyzed and yields the all-zero breakdown.
/// Scripts declaring more than `MAX_SCENES` scenes are a 400.
pub async fn analyze_text(
    RequireLineProducer(user): RequireLineProducer,
    AppJson(input): AppJson<BreakdownRequest>,
) -> AppResult<Json<BreakdownResponse>> {
    let text = input
        .script_text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Script text is required".into()))?;

    let bytes = text.len();
    let breakdown = analyze_blocking(text).await?;
    tracing::info!(
        user_id = user.user_id,
        bytes,
        scenes = breakdown.scene_count,
        "Script breakdown generated"
    );

    Ok(Json(BreakdownResponse {
        success: true,
        filename: None,
        breakdown,
    }))
}

/// POST /api/lp/breakdown/upload
///
/// Accepts a multipart form with a required `file` field holding a `.txt`,
/// `.fountain`, `.md`, `.docx` or `.pdf` script.
pub async fn analyze_upload(
    RequireLineProducer(user): RequireLineProducer,
    mut multipart: Multipart,
) -> AppResult<Json<BreakdownResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("Uploaded file has no filename".into()))?;
        let data = field.bytes().await?;
        upload = Some((filename, data.to_vec()));
    }

    let (filename, data) = upload
        .ok_or_else(|| AppError::BadRequest(format!("Missing required '{UPLOAD_FIELD}' field")))?;

    let size = data.len();
    let name = filename.clone();
    let text = tokio::task::spawn_blocking(move || document::extract(&name, &data))
        .await
        .map_err(|e| {
            AppError::Document(ExtractError::Malformed {
                filename: filename.clone(),
                reason: format!("extraction aborted: {e}"),
            })
        })??;

    let breakdown = analyze_blocking(text).await?;
    tracing::info!(
        user_id = user.user_id,
        %filename,
        bytes = size,
        scenes = breakdown.scene_count,
        "Uploaded script breakdown generated"
    );

    Ok(Json(BreakdownResponse {
        success: true,
        filename: Some(filename),
        breakdown,
    }))
}

/// Check the scene limit and run the analyzer off the async workers.
async fn analyze_blocking(text: String) -> AppResult<BreakdownResult> {
    let result = tokio::task::spawn_blocking(move || {
        breakdown::check_scene_limit(&text)?;
        Ok::<_, CoreError>(breakdown::analyze(&text))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("breakdown task failed: {e}")))??;
    Ok(result)
}
