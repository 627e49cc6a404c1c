//! Service configuration.
//!
//! Everything is read once from the environment at startup and injected into
//! whatever needs it; nothing re-reads the environment per request.

use std::time::Duration;

use crate::error::{ColophonError, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Upper bound for a single extraction request. Annotated OCR of a long
/// document can legitimately take minutes.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Process-wide configuration, loaded once at startup.
///
/// # Environment Variables
///
/// ```bash
/// # Required
/// export API_KEY=shared-secret           # bearer token callers must present
/// export MISTRAL_API_KEY=sk-...          # OCR provider credential
///
/// # Optional
/// export COLOPHON_HOST=0.0.0.0           # bind address (default 127.0.0.1)
/// export COLOPHON_PORT=8000              # bind port (default 8000)
/// export COLOPHON_REQUEST_TIMEOUT_SECS=300
/// ```
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Shared secret compared against the caller's bearer token.
    pub api_key: String,
    /// Credential for the OCR/annotation provider.
    pub mistral_api_key: String,
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Ceiling for a single extraction request, applied to the outbound
    /// provider call and to inbound request handling.
    pub request_timeout: Duration,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails if a required variable is missing; optional variables that fail
    /// to parse are logged and replaced with their defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = required_var("API_KEY")?;
        let mistral_api_key = required_var("MISTRAL_API_KEY")?;

        let host = std::env::var("COLOPHON_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parsed_var("COLOPHON_PORT", DEFAULT_PORT);
        let timeout_secs = parsed_var("COLOPHON_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            mistral_api_key,
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ColophonError::configuration(format!("{} must be set", name))),
    }
}

fn parsed_var<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Failed to parse {}='{}', using default {}", name, value, default);
            default
        }),
        Err(_) => default,
    }
}
