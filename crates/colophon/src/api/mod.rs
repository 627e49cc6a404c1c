//! REST API server for Colophon metadata extraction.
//!
//! Axum-based HTTP surface over the shared extraction function. One handler
//! implementation serves both route paths; authorization is a bearer token
//! compared against the configured shared secret.
//!
//! # Endpoints
//!
//! - `POST /extract` - Extract metadata from the document at the submitted URL
//! - `POST /api/extract` - Same handler, alternate path
//! - `GET /health` - Health check (unauthenticated)
//!
//! # Examples
//!
//! ## Starting the server
//!
//! ```no_run
//! use std::{sync::Arc, time::Duration};
//! use colophon::{MistralOcr, ServiceConfig, api::serve};
//!
//! #[tokio::main]
//! async fn main() -> colophon::Result<()> {
//!     let config = ServiceConfig::from_env()?;
//!     let ocr = Arc::new(MistralOcr::new(&config.mistral_api_key, config.request_timeout)?);
//!     serve(config, ocr).await?;
//!     Ok(())
//! }
//! ```
//!
//! # cURL Examples
//!
//! ```bash
//! curl -X POST http://localhost:8000/extract \
//!      -H "Authorization: Bearer $API_KEY" \
//!      -H "Content-Type: application/json" \
//!      -d '{"url": "https://example.com/document.pdf"}'
//!
//! curl http://localhost:8000/health
//! ```

mod auth;
mod error;
mod handlers;
mod server;
mod types;

pub use error::ApiError;
pub use server::{create_router, serve};
pub use types::{ApiState, ErrorResponse, HealthResponse};
