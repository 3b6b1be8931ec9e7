//! API error types with IntoResponse
//!
//! Every error becomes `{"success": false, "error": <code>, "message": <text>}`
//! with a fixed message per status. Causes are logged, not returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400)
    BadRequest { reason: String },

    /// Nothing to return (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this verb (405)
    MethodNotAllowed,

    /// Well-formed request that cannot be processed (422)
    Unprocessable { reason: String },

    /// Store failure (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Client-facing message for a status code.
fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable entity",
        _ => "Internal server error",
    }
}

/// Build the uniform error response for `status`.
pub fn error_response(status: StatusCode) -> Response {
    let body = Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": message_for(status)
    }));
    (status, body).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "bad request"),
            Self::NotFound { resource, id } => tracing::debug!(resource, %id, "not found"),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::debug!(%reason, "unprocessable request"),
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
        }
        error_response(status)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
