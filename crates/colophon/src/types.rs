//! Result types shared across the extraction and API layers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bibliographic metadata extracted from a single document.
///
/// The six string fields are the provider's annotation verbatim; no trimming
/// or normalization is applied. `pages` is the number of pages the provider
/// processed. Timing and cost figures are deliberately absent: they are
/// operator telemetry, logged by the extraction call, and excluded here so the
/// caller-facing contract stays stable when pricing changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub bibliographical_title: String,
    pub author: String,
    pub publisher: String,
    pub publication_year: String,
    pub description: String,
    pub summary: String,
    pub pages: u32,
}

/// Per-request accounting for one extraction call.
///
/// Only ever logged. The per-page rate tracks spend against the provider's
/// pay-per-page pricing; it is an estimate, not a billing figure.
#[derive(Debug, Clone, Copy)]
pub struct UsageReport {
    pub pages: u32,
    pub elapsed: Duration,
    pub cost_per_page: f64,
}

impl UsageReport {
    /// Total elapsed seconds, two decimals.
    pub fn elapsed_display(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }

    /// Seconds per processed page, two decimals; `N/A` when nothing was
    /// processed.
    pub fn time_per_page_display(&self) -> String {
        if self.pages == 0 {
            return "N/A".to_string();
        }
        format!("{:.2}", self.elapsed.as_secs_f64() / f64::from(self.pages))
    }

    /// Estimated total cost in dollars, four decimals.
    pub fn cost_display(&self) -> String {
        format!("{:.4}", f64::from(self.pages) * self.cost_per_page)
    }
}

impl std::fmt::Display for UsageReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pages: {} | Time: {}s ({}s/page) | Cost: ${} (${}/page)",
            self.pages,
            self.elapsed_display(),
            self.time_per_page_display(),
            self.cost_display(),
            self.cost_per_page,
        )
    }
}
