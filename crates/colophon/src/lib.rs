//! Colophon - Bibliographic Metadata Extraction Service
//!
//! Colophon is a thin service over a hosted OCR/document-annotation API. It
//! submits a document by URL, asks the provider to annotate the whole document
//! against a fixed six-field bibliographic schema (title, author, publisher,
//! publication year, description, summary), and returns the parsed annotation
//! together with the processed page count. Per-request timing and estimated
//! spend are logged, never returned.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use colophon::{MistralOcr, extract_metadata};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> colophon::Result<()> {
//!     let ocr = MistralOcr::new("mistral-api-key", Duration::from_secs(300))?;
//!     let metadata = extract_metadata(&ocr, "https://example.com/doc.pdf").await?;
//!     println!("{} ({})", metadata.bibliographical_title, metadata.publication_year);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Schema** (`schema`): the declared output fields and the fixed
//!   annotation prompt sent to the provider
//! - **Provider client** (`ocr`): one outbound call per extraction, behind the
//!   [`OcrService`] trait so callers and tests can substitute backends
//! - **Extraction** (`extract`): annotation parsing plus cost/latency
//!   accounting
//! - **API** (`api`, feature-gated): axum server exposing the authenticated
//!   `/extract` endpoint

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod schema;
pub mod types;

#[cfg(feature = "api")]
pub mod api;

pub use config::ServiceConfig;
pub use error::{ColophonError, Result};
pub use extract::{COST_PER_PAGE, extract_metadata};
pub use ocr::{MistralOcr, OcrPage, OcrResponse, OcrService};
pub use types::{DocumentMetadata, UsageReport};
