//! The shared extraction function.
//!
//! Everything the service does happens here: one annotation call, a presence
//! check on the returned annotation, a schema-checked parse into the six
//! metadata fields, and the accounting line operators watch to track spend.

use std::time::Instant;

use serde::Deserialize;

use crate::error::{ColophonError, Result};
use crate::ocr::OcrService;
use crate::types::{DocumentMetadata, UsageReport};

/// Estimated provider rate: $3 per 1000 pages of annotated OCR.
pub const COST_PER_PAGE: f64 = 0.003;

/// The annotation object as the provider returns it. Field values pass
/// through to [`DocumentMetadata`] verbatim.
#[derive(Debug, Deserialize)]
struct Annotation {
    bibliographical_title: String,
    author: String,
    publisher: String,
    publication_year: String,
    description: String,
    summary: String,
}

/// Extract bibliographic metadata from the document at `document_url`.
///
/// Fails with an annotation error when the provider returns no usable
/// annotation or one that does not match the declared schema; transport and
/// provider-side failures propagate unchanged from the [`OcrService`] call.
/// On success a single diagnostic line with page count, timing, and estimated
/// cost is logged; those figures are not part of the returned value.
pub async fn extract_metadata(ocr: &dyn OcrService, document_url: &str) -> Result<DocumentMetadata> {
    let started = Instant::now();

    let response = ocr.annotate(document_url).await?;

    let pages = u32::try_from(response.pages.len()).unwrap_or(u32::MAX);

    let raw = response
        .document_annotation
        .ok_or_else(|| ColophonError::annotation("OCR provider returned no metadata for this document"))?;

    let annotation: Annotation = serde_json::from_str(&raw)
        .map_err(|e| ColophonError::annotation(format!("malformed metadata annotation: {}", e)))?;

    let usage = UsageReport {
        pages,
        elapsed: started.elapsed(),
        cost_per_page: COST_PER_PAGE,
    };
    tracing::info!("{}", usage);

    Ok(DocumentMetadata {
        bibliographical_title: annotation.bibliographical_title,
        author: annotation.author,
        publisher: annotation.publisher,
        publication_year: annotation.publication_year,
        description: annotation.description,
        summary: annotation.summary,
        pages,
    })
}
