//! Client for the hosted OCR/document-annotation provider.
//!
//! One outbound call per extraction: the document is referenced by URL, the
//! provider OCRs every page and runs a structured-output annotation pass
//! constrained to the metadata schema. The client is stateless and safe to
//! share across concurrent requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ColophonError, Result};
use crate::schema;

/// Provider model used for annotated OCR.
const OCR_MODEL: &str = "mistral-ocr-latest";

/// Default API base; overridable for tests.
const MISTRAL_API_BASE: &str = "https://api.mistral.ai";

/// The outbound annotation call, as a seam.
///
/// The server holds the backend as a trait object so tests can substitute a
/// deterministic stub for the hosted service.
#[async_trait]
pub trait OcrService: Send + Sync {
    /// Submit a document by URL for annotated OCR.
    async fn annotate(&self, document_url: &str) -> Result<OcrResponse>;
}

/// Request payload for `POST /v1/ocr`.
#[derive(Debug, Serialize)]
struct AnnotationRequest<'a> {
    model: &'a str,
    document: DocumentSource<'a>,
    document_annotation_format: Value,
    document_annotation_prompt: &'a str,
    include_image_base64: bool,
}

/// Document reference forms accepted by the provider.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DocumentSource<'a> {
    DocumentUrl { document_url: &'a str },
}

/// Provider response, reduced to the fields this service consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OcrResponse {
    /// One entry per processed page.
    #[serde(default)]
    pub pages: Vec<OcrPage>,
    /// JSON-encoded annotation matching the requested schema, when the
    /// annotation pass produced one.
    #[serde(default)]
    pub document_annotation: Option<String>,
}

/// Per-page entry in the provider response. Only its presence is used; the
/// recognized page content is not consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OcrPage {
    #[serde(default)]
    pub index: u32,
}

/// Mistral OCR client.
pub struct MistralOcr {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MistralOcr {
    /// Create a new client.
    ///
    /// `timeout` bounds the whole outbound call; annotated OCR of a long
    /// document can take minutes, so callers should pass the configured
    /// request ceiling rather than a typical API timeout.
    pub fn new(api_key: impl Into<String>, timeout: std::time::Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: MISTRAL_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API base (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl OcrService for MistralOcr {
    async fn annotate(&self, document_url: &str) -> Result<OcrResponse> {
        let request = AnnotationRequest {
            model: OCR_MODEL,
            document: DocumentSource::DocumentUrl { document_url },
            document_annotation_format: schema::metadata_response_format(),
            document_annotation_prompt: schema::EXTRACTION_PROMPT,
            include_image_base64: false,
        };

        let response = self
            .http
            .post(format!("{}/v1/ocr", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ColophonError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
