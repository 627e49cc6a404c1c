//! Error types for Colophon.
//!
//! All fallible operations return [`ColophonError`] via the [`Result`] alias.
//! Transport failures from the provider call keep their `reqwest` source;
//! provider-side failures (non-2xx responses, missing or malformed
//! annotations) get their own variants so callers can tell what the provider
//! actually did.

use thiserror::Error;

/// Result type alias using `ColophonError`.
pub type Result<T> = std::result::Result<T, ColophonError>;

/// Main error type for all Colophon operations.
///
/// # Variants
///
/// - `Io` - Socket and file-system errors (always bubble up)
/// - `Configuration` - Missing or invalid environment configuration
/// - `Http` - Transport-level failures talking to the OCR provider
/// - `Upstream` - The provider answered with a non-success status
/// - `Annotation` - The provider produced no usable document annotation
/// - `Serialization` - JSON encode/decode errors outside the annotation path
#[derive(Debug, Error)]
pub enum ColophonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("annotation error: {message}")]
    Annotation { message: String },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColophonError {
    /// Create a Configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an Annotation error
    pub fn annotation<S: Into<String>>(message: S) -> Self {
        Self::Annotation {
            message: message.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for ColophonError {
    fn from(err: serde_json::Error) -> Self {
        ColophonError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
