//! State of a shorten submission.
//!
//! Idle → InFlight → Success | Failure. Each terminal state renders exactly
//! one thing: the result view or an error message.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::link::Link;
use crate::models::UrlRecord;

/// Shown while the shorten request is pending.
pub const IN_PROGRESS_MESSAGE: &str = "Shortening URL...";
/// Heading of the result view.
pub const SUCCESS_HEADING: &str = "URL shortened successfully!";
/// Shown when the request failed before any usable response arrived.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
/// Used when an error response carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// The rendered outcome of a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultView {
    /// Link to the submitted URL, as echoed by the backend.
    pub original: Link,
    /// Link to the new short URL.
    pub short: Link,
    /// Text placed on the clipboard by the copy action.
    pub copy_text: String,
}

impl From<&UrlRecord> for ResultView {
    fn from(record: &UrlRecord) -> Self {
        Self {
            original: Link::from_url(&record.original_url),
            short: Link::from_url(&record.short_url),
            copy_text: record.short_url.clone(),
        }
    }
}

/// Where a submission currently stands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request sent, waiting for the response.
    InFlight,
    /// The backend created the short URL.
    Success(ResultView),
    /// The submission failed; the message is ready for display.
    Failure(String),
}

impl SubmissionState {
    /// Whether this is `Success` or `Failure`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// Whether the request is pending.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// The error message of a failed submission.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// The result view of a successful submission.
    #[must_use]
    pub const fn result(&self) -> Option<&ResultView> {
        match self {
            Self::Success(view) => Some(view),
            _ => None,
        }
    }
}

/// Message rendered in the result area when shortening fails.
#[must_use]
pub fn shorten_failure_message(error: &Error) -> String {
    match error {
        Error::Status { .. } => {
            format!("Error: {}", error.server_message().unwrap_or(UNKNOWN_ERROR))
        }
        _ => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);
        assert!(!state.is_terminal());
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_result_view_from_record() {
        let record = UrlRecord::new("https://example.com", "https://short.ly/abc");
        let view = ResultView::from(&record);
        assert_eq!(view.original.href.as_deref(), Some("https://example.com"));
        assert_eq!(view.short.text, "https://short.ly/abc");
        assert_eq!(view.copy_text, "https://short.ly/abc");
    }

    #[test]
    fn test_failure_message_uses_server_error() {
        let err = Error::Status {
            status: 400,
            status_text: "Bad Request".to_string(),
            message: Some("invalid url".to_string()),
        };
        assert_eq!(shorten_failure_message(&err), "Error: invalid url");
    }

    #[test]
    fn test_failure_message_without_server_error() {
        let err = Error::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            message: None,
        };
        assert_eq!(shorten_failure_message(&err), "Error: Unknown error");
    }

    #[test]
    fn test_network_and_decode_failures_are_generic() {
        assert_eq!(
            shorten_failure_message(&Error::Transport("reset".to_string())),
            GENERIC_FAILURE
        );
        assert_eq!(
            shorten_failure_message(&Error::Decode("eof".to_string())),
            GENERIC_FAILURE
        );
    }
}
