//! API server setup.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::error::{ColophonError, Result};
use crate::ocr::OcrService;

use super::{
    handlers::{extract_handler, health_handler, method_not_allowed_handler},
    types::ApiState,
};

/// Create the API router with all routes configured.
///
/// Public so the router can be embedded in a larger application or driven
/// directly in tests. The extract handler is bound at both `/extract` and
/// `/api/extract`; the two paths are equivalent.
///
/// # Arguments
///
/// * `config` - Process-wide configuration (shared secret, request ceiling).
/// * `ocr` - Annotation backend handle, shared across requests.
pub fn create_router(config: ServiceConfig, ocr: Arc<dyn OcrService>) -> Router {
    let request_timeout = config.request_timeout;
    let state = ApiState {
        config: Arc::new(config),
        ocr,
    };

    Router::new()
        .route("/extract", post(extract_handler))
        .route("/api/extract", post(extract_handler))
        .route("/health", get(health_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server.
///
/// Binds to the host and port from `config` and serves until the process
/// exits. The request timeout from `config` doubles as the inbound request
/// ceiling; there is no other limit on how long an extraction may run.
///
/// # Examples
///
/// ```no_run
/// use std::{sync::Arc, time::Duration};
/// use colophon::{MistralOcr, ServiceConfig, api::serve};
///
/// #[tokio::main]
/// async fn main() -> colophon::Result<()> {
///     let config = ServiceConfig::from_env()?;
///     let ocr = Arc::new(MistralOcr::new(&config.mistral_api_key, config.request_timeout)?);
///     serve(config, ocr).await?;
///     Ok(())
/// }
/// ```
pub async fn serve(config: ServiceConfig, ocr: Arc<dyn OcrService>) -> Result<()> {
    let ip: IpAddr = config
        .host
        .parse()
        .map_err(|e| ColophonError::configuration(format!("Invalid host address: {}", e)))?;

    let addr = SocketAddr::new(ip, config.port);
    let app = create_router(config, ocr);

    tracing::info!("Starting Colophon API server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(ColophonError::Io)?;

    axum::serve(listener, app).await.map_err(ColophonError::Io)?;

    Ok(())
}
