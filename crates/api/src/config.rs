use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Default upload ceiling for script documents (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// `JWT_SECRET`. The database is optional: without `DATABASE_URL` the server
/// starts in degraded mode and persistence-backed endpoints answer 503.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Document store connection settings.
    pub database: DatabaseConfig,
    /// Where the risk model artifact is persisted. `None` keeps it in memory.
    pub risk_model_path: Option<PathBuf>,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string. `None` means run without a store.
    pub url: Option<String>,
    /// Connection attempts before giving up (default: `3`).
    pub connect_attempts: u32,
    /// Delay between attempts in seconds (default: `2`).
    pub retry_delay_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `DATABASE_URL`         | unset (degraded mode)      |
    /// | `DB_CONNECT_ATTEMPTS`  | `3`                        |
    /// | `DB_RETRY_DELAY_SECS`  | `2`                        |
    /// | `RISK_MODEL_PATH`      | unset (in-memory model)    |
    ///
    /// # Panics
    ///
    /// Panics when a numeric variable does not parse, or when `JWT_SECRET`
    /// is missing (see [`JwtConfig::from_env`]).
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 5000);

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30);
        let max_upload_bytes: usize = env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES);

        let database = DatabaseConfig {
            url: non_empty_var("DATABASE_URL"),
            connect_attempts: env_or("DB_CONNECT_ATTEMPTS", 3),
            retry_delay_secs: env_or("DB_RETRY_DELAY_SECS", 2),
        };

        let risk_model_path = non_empty_var("RISK_MODEL_PATH").map(PathBuf::from);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            database,
            risk_model_path,
            jwt,
        }
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>())),
        Err(_) => default,
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
