//! Display-safe links built from untrusted URL strings.

use serde::{Deserialize, Serialize};

/// Schemes a rendered link may navigate to.
pub const NAVIGABLE_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// A URL prepared for display.
///
/// `text` is always the URL exactly as received. `href` is the same string
/// when its scheme is navigable and `None` otherwise, so values such as
/// `javascript:` URLs are shown but never become clickable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Visible text.
    pub text: String,
    /// Navigation target, if safe.
    pub href: Option<String>,
}

impl Link {
    /// Build a link from a URL string.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        Self {
            text: url.to_string(),
            href: is_navigable(url).then(|| url.to_string()),
        }
    }

    /// Whether the link can be followed.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.href.is_some()
    }
}

/// Whether `url` starts with one of the [`NAVIGABLE_SCHEMES`] followed by `://`.
#[must_use]
pub fn is_navigable(url: &str) -> bool {
    let Some((scheme, rest)) = url.trim_start().split_once("://") else {
        return false;
    };
    !rest.is_empty()
        && NAVIGABLE_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}
