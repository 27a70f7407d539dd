//! Client configuration.
//!
//! Every field has a default, so an empty object (or no configuration at
//! all) yields a client talking to the same origin on the standard routes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default route listing all shortened URLs.
pub const DEFAULT_URLS_PATH: &str = "/api/urls";
/// Default route creating a short URL.
pub const DEFAULT_SHORTEN_PATH: &str = "/api/shorten";
/// Default API health route.
pub const DEFAULT_HEALTH_PATH: &str = "/api/health";

fn default_urls_path() -> String {
    DEFAULT_URLS_PATH.to_string()
}

fn default_shorten_path() -> String {
    DEFAULT_SHORTEN_PATH.to_string()
}

fn default_health_path() -> String {
    DEFAULT_HEALTH_PATH.to_string()
}

const fn default_true() -> bool {
    true
}

/// Configuration of the web client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the API (e.g. `https://sho.rt`). Empty means same origin.
    #[serde(default)]
    pub api_base: String,
    /// Route listing all shortened URLs.
    #[serde(default = "default_urls_path")]
    pub urls_path: String,
    /// Route creating a short URL.
    #[serde(default = "default_shorten_path")]
    pub shorten_path: String,
    /// Route reporting API health.
    #[serde(default = "default_health_path")]
    pub health_path: String,
    /// Open rendered links in a new browser tab.
    #[serde(default = "default_true")]
    pub open_links_in_new_tab: bool,
    /// Probe the health route at start-up.
    #[serde(default = "default_true")]
    pub check_health: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            urls_path: default_urls_path(),
            shorten_path: default_shorten_path(),
            health_path: default_health_path(),
            open_links_in_new_tab: true,
            check_health: true,
        }
    }
}

impl ClientConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("Failed to parse client config: {e}")))?;
        config.validate()?;
        debug!(api_base = %config.api_base, "Loaded client config");
        Ok(config)
    }

    /// Check that the base and routes can be joined into request URLs.
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Configuration(format!(
                "api_base must be empty or an http(s) origin, got '{base}'"
            )));
        }

        for (name, path) in [
            ("urls_path", &self.urls_path),
            ("shorten_path", &self.shorten_path),
            ("health_path", &self.health_path),
        ] {
            if !path.starts_with('/') {
                return Err(Error::Configuration(format!(
                    "{name} must start with '/', got '{path}'"
                )));
            }
        }

        Ok(())
    }

    /// Base that short codes are appended to when a record lacks a
    /// `short_url`: the API base, or the page origin when the API is served
    /// from the same origin.
    #[must_use]
    pub fn link_base<'a>(&'a self, page_origin: &'a str) -> &'a str {
        let base = self.api_base.trim();
        if base.is_empty() { page_origin } else { base }
    }

    /// Join the API base with a route.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim().trim_end_matches('/'))
    }

    /// Full URL of the list route.
    #[must_use]
    pub fn urls_endpoint(&self) -> String {
        self.endpoint(&self.urls_path)
    }

    /// Full URL of the shorten route.
    #[must_use]
    pub fn shorten_endpoint(&self) -> String {
        self.endpoint(&self.shorten_path)
    }

    /// Full URL of the health route.
    #[must_use]
    pub fn health_endpoint(&self) -> String {
        self.endpoint(&self.health_path)
    }
}
