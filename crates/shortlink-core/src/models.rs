//! Wire types exchanged with the shortening backend.
//!
//! The backend owns these records; the client only reads them. Fields beyond
//! the original/short pair are optional so older or leaner backends still
//! decode cleanly. Backends that only send a `short_code` get their short
//! URL built on the client, see [`resolve_records`].

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A stored mapping from an original URL to its short alias.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlRecord {
    /// The long-form URL submitted for shortening.
    pub original_url: String,
    /// The backend-generated alias that resolves to `original_url`.
    ///
    /// Empty when the backend only sent `short_code`.
    #[serde(default)]
    pub short_url: String,
    /// The short code embedded in `short_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    /// Number of times the short URL has been followed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_count: Option<u64>,
    /// Backend identifier of the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation timestamp, as an ISO-8601 string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UrlRecord {
    /// Create a record holding only the original/short pair.
    #[must_use]
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
            short_code: None,
            click_count: None,
            id: None,
            created_at: None,
        }
    }

    /// Set the click count.
    #[must_use]
    pub const fn with_click_count(mut self, click_count: u64) -> Self {
        self.click_count = Some(click_count);
        self
    }

    /// Set the short code.
    #[must_use]
    pub fn with_short_code(mut self, short_code: impl Into<String>) -> Self {
        self.short_code = Some(short_code.into());
        self
    }

    /// Fill in `short_url` from `link_base` and `short_code` when the
    /// backend did not send one.
    ///
    /// Returns `None` when the record has neither.
    #[must_use]
    pub fn resolve_short_url(mut self, link_base: &str) -> Option<Self> {
        if !self.short_url.trim().is_empty() {
            return Some(self);
        }

        let code = self
            .short_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())?;
        self.short_url = format!("{}/{code}", link_base.trim().trim_end_matches('/'));
        Some(self)
    }
}

/// Resolve the short URL of every record, dropping those that have no way
/// to produce one.
#[must_use]
pub fn resolve_records(records: Vec<UrlRecord>, link_base: &str) -> Vec<UrlRecord> {
    let total = records.len();
    let resolved: Vec<UrlRecord> = records
        .into_iter()
        .filter_map(|record| record.resolve_short_url(link_base))
        .collect();

    if resolved.len() < total {
        warn!(
            dropped = total - resolved.len(),
            "Skipped records without short_url or short_code"
        );
    }
    resolved
}

/// Body of `POST /api/shorten`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenRequest {
    /// The URL to shorten, exactly as the user typed it.
    pub original_url: String,
}

impl ShortenRequest {
    /// Create a new shorten request.
    #[must_use]
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Human-readable error text.
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    /// Reported status, `"ok"` when the API is running.
    pub status: String,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
}
