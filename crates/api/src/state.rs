use std::sync::Arc;

use shotweave_core::error::CoreError;
use shotweave_core::risk::RiskModel;
use shotweave_db::DbPool;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Message returned whenever a request needs the store and none is connected.
pub const STORE_UNAVAILABLE: &str = "Database not connected. Please try again later.";

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted internally and the rest
/// sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. `None` when the server runs degraded.
    pub pool: Option<DbPool>,
    pub config: Arc<ServerConfig>,
    /// Fitted once at startup, read-only afterwards.
    pub risk_model: Arc<RiskModel>,
}

impl AppState {
    /// The connected pool, or a 503 when running without a store.
    pub fn require_pool(&self) -> Result<&DbPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::Core(CoreError::Unavailable(STORE_UNAVAILABLE.into())))
    }
}
