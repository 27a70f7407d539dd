//! The shared notification surface.
//!
//! One message is visible at a time. Showing a new message replaces the
//! current one; only an explicit dismiss clears it.

use serde::{Deserialize, Serialize};

/// Type of notice to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NoticeKind {
    /// Informational message.
    #[default]
    Info,
    /// Success message.
    Success,
    /// Error message.
    Error,
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The notice type, used for styling.
    pub kind: NoticeKind,
    /// The text to display.
    pub message: String,
}

impl Notice {
    /// Create a notice.
    #[must_use]
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an info notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    /// Create a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    /// Create an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    /// Whether this notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Anything that can put a [`Notice`] in front of the user.
pub trait Notifier {
    /// Show `notice`, replacing whatever is currently displayed.
    fn notify(&self, notice: Notice);
}

/// State of the single-slot notification surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSurface {
    current: Option<Notice>,
}

impl NotificationSurface {
    /// An empty surface.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Show a notice, overwriting the current one.
    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// Hide the current notice.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The notice currently displayed.
    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Whether a notice is displayed.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_overwrites_current() {
        let mut surface = NotificationSurface::new();
        surface.show(Notice::error("first"));
        surface.show(Notice::success("second"));
        assert_eq!(surface.current(), Some(&Notice::success("second")));
    }

    #[test]
    fn test_notice_stays_until_dismissed() {
        let mut surface = NotificationSurface::new();
        assert!(!surface.is_visible());
        surface.show(Notice::info("hello"));
        assert!(surface.is_visible());
        surface.dismiss();
        assert!(!surface.is_visible());
        assert_eq!(surface.current(), None);
    }

    #[test]
    fn test_notice_kind_display() {
        assert_eq!(NoticeKind::Info.to_string(), "info");
        assert_eq!(NoticeKind::Success.to_string(), "success");
        assert_eq!(NoticeKind::Error.to_string(), "error");
        assert!(Notice::error("x").is_error());
        assert!(!Notice::success("x").is_error());
    }
}
