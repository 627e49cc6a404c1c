//! Bearer-token authorization.
//!
//! A single shared secret, compared against the token in the Authorization
//! header. There are no sessions, no expiry, and no multi-key support.

use axum::http::{HeaderMap, header};

use super::error::ApiError;

/// Check the Authorization header against the configured secret.
///
/// A missing or non-`Bearer` header is a 401; a present token that does not
/// equal the secret is a 403.
pub(super) fn authorize(headers: &HeaderMap, expected_token: &str) -> Result<(), ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        None => Err(ApiError::Unauthorized(
            "Missing or invalid Authorization header".to_string(),
        )),
        Some(token) if token != expected_token => {
            Err(ApiError::Forbidden("Invalid API key".to_string()))
        }
        Some(_) => Ok(()),
    }
}
