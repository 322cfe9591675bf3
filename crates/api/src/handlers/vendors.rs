//! Handler for Localized Vendor Ratings (LVR).

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shotweave_db::models::vendor::{seed_vendors, Vendor};
use shotweave_db::repositories::VendorRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireLineProducer;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VendorListResponse {
    pub success: bool,
    pub vendors: Vec<Vendor>,
}

/// GET /api/lp/lvr
///
/// Lists vendor ratings, seeding the table on first use. Without a store, or
/// when the store read fails, the built-in list is served instead.
pub async fn list_vendors(
    State(state): State<AppState>,
    RequireLineProducer(_user): RequireLineProducer,
) -> AppResult<Json<VendorListResponse>> {
    let vendors = match &state.pool {
        Some(pool) => match load_vendors(pool).await {
            Ok(vendors) => vendors,
            Err(e) => {
                tracing::warn!(error = %e, "Vendor read failed, serving built-in ratings");
                seed_vendors()
            }
        },
        None => {
            tracing::debug!("No store connected, serving built-in ratings");
            seed_vendors()
        }
    };

    Ok(Json(VendorListResponse {
        success: true,
        vendors,
    }))
}

async fn load_vendors(pool: &shotweave_db::DbPool) -> Result<Vec<Vendor>, sqlx::Error> {
    VendorRepo::seed_if_empty(pool).await?;
    VendorRepo::list(pool).await
}
