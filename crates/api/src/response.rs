//! Shared success envelopes for API handlers.
//!
//! Every successful response carries `"success": true`. Error responses are
//! rendered by [`crate::error::AppError`].

use serde::Serialize;

/// `{ "success": true, "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
