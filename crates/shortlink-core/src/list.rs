//! View model of the URL list.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::link::Link;
use crate::models::UrlRecord;

/// Shown when the list fetch could not reach the server.
pub const LIST_NETWORK_FAILURE: &str =
    "Failed to fetch URLs. Please check your connection or server logs.";

/// One row of the URL list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEntry {
    /// Link to the original URL.
    pub original: Link,
    /// Link to the short URL.
    pub short: Link,
    /// Text placed on the clipboard by the row's copy action.
    pub copy_text: String,
    /// Click count, when the backend reports one.
    pub click_count: Option<u64>,
}

impl From<&UrlRecord> for ListEntry {
    fn from(record: &UrlRecord) -> Self {
        Self {
            original: Link::from_url(&record.original_url),
            short: Link::from_url(&record.short_url),
            copy_text: record.short_url.clone(),
            click_count: record.click_count,
        }
    }
}

/// What the list area shows after a successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListView {
    /// No URLs yet; show the placeholder message.
    Placeholder,
    /// One entry per record, in backend order.
    Entries(Vec<ListEntry>),
}

impl ListView {
    /// Build the view for a fetched collection.
    #[must_use]
    pub fn from_records(records: &[UrlRecord]) -> Self {
        if records.is_empty() {
            Self::Placeholder
        } else {
            Self::Entries(records.iter().map(ListEntry::from).collect())
        }
    }

    /// Rendered entries; empty for the placeholder.
    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        match self {
            Self::Placeholder => &[],
            Self::Entries(entries) => entries,
        }
    }

    /// Number of rendered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the placeholder is shown.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Total clicks across entries that report a count.
    #[must_use]
    pub fn total_clicks(&self) -> u64 {
        self.entries().iter().filter_map(|e| e.click_count).sum()
    }

    /// Take the entries out of the view.
    #[must_use]
    pub fn into_entries(self) -> Vec<ListEntry> {
        match self {
            Self::Placeholder => Vec::new(),
            Self::Entries(entries) => entries,
        }
    }
}

/// What the list area shows, including before any fetch has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDisplay {
    /// No fetch has completed yet.
    Loading,
    /// Every fetch so far has failed and there is nothing to show.
    Unavailable,
    /// The last successfully fetched list.
    Ready(ListView),
}

impl ListDisplay {
    /// Pick the display for the rendered list and the outcome of the latest
    /// fetch. A list that was rendered once stays on screen after failures.
    #[must_use]
    pub fn select(list: Option<ListView>, last_fetch_failed: bool) -> Self {
        match list {
            Some(view) => Self::Ready(view),
            None if last_fetch_failed => Self::Unavailable,
            None => Self::Loading,
        }
    }
}

/// Message shown on the notification surface when the list fetch fails.
#[must_use]
pub fn list_failure_message(error: &Error) -> String {
    match error {
        Error::Status {
            message,
            status_text,
            status,
        } => {
            let detail = match message.as_deref() {
                Some(text) if !text.is_empty() => text.to_string(),
                _ if !status_text.is_empty() => status_text.clone(),
                _ => format!("HTTP {status}"),
            };
            format!("Error fetching URLs: {detail}")
        }
        _ => LIST_NETWORK_FAILURE.to_string(),
    }
}
