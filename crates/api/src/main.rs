use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shotweave_api::config::ServerConfig;
use shotweave_api::router::build_app_router;
use shotweave_api::state::AppState;
use shotweave_core::risk::{RiskModel, RiskModelError};
use shotweave_db::repositories::VendorRepo;
use shotweave_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shotweave_api=debug,shotweave_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database (optional) ---
    let pool = connect_store(&config).await;

    // --- Risk model ---
    let risk_model = init_risk_model(&config).expect("Failed to initialise risk model");
    tracing::info!(
        intercept = risk_model.intercept,
        coefficients = ?risk_model.coefficients,
        "Risk model ready"
    );

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        risk_model: Arc::new(risk_model),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect, migrate and seed the store. Any failure leaves the server
/// running without one.
async fn connect_store(config: &ServerConfig) -> Option<DbPool> {
    let Some(url) = config.database.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, running without a database");
        return None;
    };

    let pool = match shotweave_db::connect_with_retry(
        url,
        config.database.connect_attempts,
        Duration::from_secs(config.database.retry_delay_secs),
    )
    .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Database unreachable, running without a database");
            return None;
        }
    };

    if let Err(e) = shotweave_db::run_migrations(&pool).await {
        tracing::error!(error = %e, "Database migrations failed, running without a database");
        return None;
    }
    tracing::info!("Database migrations applied");

    if let Err(e) = VendorRepo::seed_if_empty(&pool).await {
        tracing::warn!(error = %e, "Vendor seeding failed");
    }

    Some(pool)
}

/// Train in memory, or load/persist the artifact at `RISK_MODEL_PATH`.
fn init_risk_model(config: &ServerConfig) -> Result<RiskModel, RiskModelError> {
    match &config.risk_model_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading risk model artifact");
            RiskModel::load_or_train(path)
        }
        None => RiskModel::trained(),
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
