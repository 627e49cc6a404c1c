//! API request and response types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::ocr::OcrService;

/// API server state.
///
/// Immutable after router construction: the configuration (including the
/// shared secret) and the provider client handle are created once at startup
/// and shared read-only across requests.
#[derive(Clone)]
pub struct ApiState {
    /// Process-wide configuration.
    pub config: Arc<ServiceConfig>,
    /// Outbound annotation backend.
    pub ocr: Arc<dyn OcrService>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// API version
    pub version: String,
}

/// Error response body used for every non-2xx reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
