//! Error types for Shortlink client operations.
//!
//! Errors fall into three families that the page controller reports
//! differently: network failures (the request never completed), application
//! failures (the backend answered with a non-success status), and clipboard
//! failures. Configuration problems form a fourth family that only surfaces
//! at start-up.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never reached the server or its response was unreadable.
    Network,
    /// The server answered with a non-success status.
    Application,
    /// Copying to the clipboard failed.
    Clipboard,
    /// The client configuration is invalid.
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Application => write!(f, "application"),
            Self::Clipboard => write!(f, "clipboard"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

/// Errors that can occur in Shortlink client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or no response was received.
    #[error("Network request failed: {0}")]
    Transport(String),

    /// The server responded with a non-success HTTP status.
    #[error("Request failed with status {status} {status_text}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// HTTP status text as reported by the browser.
        status_text: String,
        /// The `error` field of the JSON body, if the server sent one.
        message: Option<String>,
    },

    /// A success response carried a body that is not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The clipboard copy command failed.
    #[error("Clipboard copy failed: {0}")]
    Clipboard(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Decode(_) => ErrorKind::Network,
            Self::Status { .. } => ErrorKind::Application,
            Self::Clipboard(_) => ErrorKind::Clipboard,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// The server-reported error text, when the backend sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// HTTP status code, for application errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
