//! Role-based access control (RBAC) extractors.
//!
//! Each dashboard has its own extractor wrapping [`AuthUser`]. The
//! `Producer/CEO` role passes every gate; the other roles pass only their own.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shotweave_core::error::CoreError;
use shotweave_core::roles::{ROLE_CREATIVE, ROLE_EXECUTOR, ROLE_LINE_PRODUCER, ROLE_PRODUCER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Admit `user` when its role is `Producer/CEO` or `dashboard_role`.
fn admit(user: AuthUser, dashboard_role: Option<&str>) -> Result<AuthUser, AppError> {
    if user.role == ROLE_PRODUCER || dashboard_role.is_some_and(|r| r == user.role) {
        return Ok(user);
    }
    let required = match dashboard_role {
        Some(role) => format!("{role} or {ROLE_PRODUCER} role required"),
        None => format!("{ROLE_PRODUCER} role required"),
    };
    tracing::debug!(user_id = user.user_id, role = %user.role, %required, "Role gate rejected request");
    Err(AppError::Core(CoreError::Forbidden(required)))
}

/// Requires `Producer/CEO`. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn ceo_only(RequireProducer(user): RequireProducer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireProducer(pub AuthUser);

impl FromRequestParts<AppState> for RequireProducer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        admit(user, None).map(RequireProducer)
    }
}

/// Requires `Line Producer` or `Producer/CEO`.
pub struct RequireLineProducer(pub AuthUser);

impl FromRequestParts<AppState> for RequireLineProducer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        admit(user, Some(ROLE_LINE_PRODUCER)).map(RequireLineProducer)
    }
}

/// Requires `1st AD/Unit Manager` or `Producer/CEO`.
pub struct RequireExecutor(pub AuthUser);

impl FromRequestParts<AppState> for RequireExecutor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        admit(user, Some(ROLE_EXECUTOR)).map(RequireExecutor)
    }
}

/// Requires `VFX Supervisor/Director` or `Producer/CEO`.
pub struct RequireCreative(pub AuthUser);

impl FromRequestParts<AppState> for RequireCreative {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        admit(user, Some(ROLE_CREATIVE)).map(RequireCreative)
    }
}
