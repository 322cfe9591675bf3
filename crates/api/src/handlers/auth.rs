//! Handlers for account creation and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shotweave_core::error::CoreError;
use shotweave_core::roles::{is_known_role, ALL_ROLES};
use shotweave_db::models::user::{CreateUser, UserProfile};
use shotweave_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::request::{present, AppJson};
use crate::response::MessageResponse;
use crate::state::AppState;

const SIGNUP_MISSING_FIELDS: &str = "Missing required fields";
const LOGIN_MISSING_FIELDS: &str = "Username and password required";
const DUPLICATE_ACCOUNT: &str = "Username or email already exists.";
const BAD_CREDENTIALS: &str = "Invalid username or password.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/signup`.
///
/// Fields are optional at the serde level so a missing field yields the
/// standard 400 message rather than a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(max = 120, message = "Name is too long"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "Username is too long"))]
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserProfile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/signup
///
/// Register a crew member under one of the four dashboard roles.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (Some(name), Some(email), Some(username), Some(password), Some(role)) = (
        present(&input.name),
        present(&input.email),
        present(&input.username),
        input.password.as_deref().filter(|p| !p.is_empty()),
        present(&input.role),
    ) else {
        return Err(AppError::BadRequest(SIGNUP_MISSING_FIELDS.into()));
    };

    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if !is_known_role(role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{role}'. Expected one of: {}",
            ALL_ROLES.join(", ")
        ))));
    }
    validate_password_strength(password).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let pool = state.require_pool()?;

    if UserRepo::exists_by_username_or_email(pool, username, email).await? {
        return Err(AppError::Core(CoreError::Conflict(DUPLICATE_ACCOUNT.into())));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("User registered successfully. Please login.")),
    ))
}

/// POST /api/login
///
/// Verify credentials and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (
        present(&input.username),
        input.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest(LOGIN_MISSING_FIELDS.into()));
    };

    let pool = state.require_pool()?;

    let user = UserRepo::find_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %user.username, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())));
    }

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, &user.username, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        access_token,
        expires_in: jwt.expires_in_secs(),
        user: user.into(),
    }))
}
