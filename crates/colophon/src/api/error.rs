//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;
use crate::error::ColophonError;

/// Error type for API handlers.
///
/// Client-correctable failures carry their own message; anything that went
/// wrong during extraction lands in `Internal` and is reported with the
/// underlying error's message.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed Authorization header (401).
    Unauthorized(String),
    /// Bearer token did not match the configured secret (403).
    Forbidden(String),
    /// Malformed body or missing/invalid `url` field (400).
    BadRequest(String),
    /// Route exists but the method is not POST (405).
    MethodNotAllowed,
    /// Extraction failure of any kind (500).
    Internal(ColophonError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::BadRequest(message) => message.clone(),
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::Internal(err) => err.to_string(),
        }
    }
}

impl From<ColophonError> for ApiError {
    fn from(err: ColophonError) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
