//! Portal error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use wellbook_core::IdentityError;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Profile already exists")]
    ProfileExists,

    #[error("No client profile on file")]
    NoClientProfile,

    #[error("Invalid status transition")]
    InvalidTransition,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Identity resolution timed out")]
    ResolveTimeout,

    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<IdentityError> for PortalError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Unauthenticated => PortalError::NotAuthenticated,
            IdentityError::Timeout => PortalError::ResolveTimeout,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PortalError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Not authenticated"),
            PortalError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            PortalError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            PortalError::EmailTaken => (StatusCode::CONFLICT, "Email already registered"),
            PortalError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            PortalError::ProfileExists => (StatusCode::CONFLICT, "Profile already exists"),
            PortalError::NoClientProfile => (StatusCode::CONFLICT, "No client profile on file"),
            PortalError::InvalidTransition => (StatusCode::CONFLICT, "Invalid status transition"),
            PortalError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            PortalError::ResolveTimeout => {
                tracing::warn!("Identity resolution timed out");
                (StatusCode::GATEWAY_TIMEOUT, "Identity resolution timed out")
            }
            PortalError::Backend(msg) => {
                tracing::error!("Backend request failed: {}", msg);
                (StatusCode::BAD_GATEWAY, "Backend request failed")
            }
            PortalError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = json!({ "success": false, "reason": message });
        (status, axum::Json(body)).into_response()
    }
}
