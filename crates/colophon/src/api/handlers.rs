//! API request handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use serde_json::Value;

use crate::extract::extract_metadata;
use crate::types::DocumentMetadata;

use super::{
    auth::authorize,
    error::ApiError,
    types::{ApiState, HealthResponse},
};

/// Extract endpoint handler.
///
/// POST /extract (also bound at /api/extract)
///
/// Gates run in order: bearer authorization, then body validation, then the
/// provider call. The body must be a JSON object with a non-empty string
/// `url`; no URL-format validation happens here, the provider decides whether
/// it can fetch the document.
pub async fn extract_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DocumentMetadata>, ApiError> {
    authorize(&headers, &state.config.api_key)?;

    let Json(body) = payload.map_err(|_| ApiError::BadRequest("Invalid JSON body".to_string()))?;

    let url = match body.get("url") {
        Some(Value::String(url)) if !url.is_empty() => url.clone(),
        _ => return Err(ApiError::BadRequest("Missing 'url' in request body".to_string())),
    };

    let metadata = extract_metadata(state.ocr.as_ref(), &url).await.map_err(|err| {
        tracing::error!("Extraction failed: {}", err);
        ApiError::from(err)
    })?;

    Ok(Json(metadata))
}

/// Health check endpoint handler.
///
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for known paths hit with the wrong method.
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
