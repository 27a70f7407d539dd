//! Clipboard seam and the messages reported after a copy.

use crate::error::Result;

/// Shown after a successful copy.
pub const COPY_SUCCESS: &str = "Short URL copied to clipboard!";
/// Shown when the copy failed.
pub const COPY_FAILURE: &str = "Failed to copy URL. Please copy manually.";

/// Synchronous access to the system clipboard.
///
/// Implementations must not wait on a permission prompt; a copy either
/// happens immediately or fails.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Clipboard`] if the copy command is unavailable
    /// or reports failure.
    fn copy_text(&self, text: &str) -> Result<()>;
}
