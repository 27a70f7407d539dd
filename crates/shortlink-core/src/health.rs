//! API reachability shown in the page header.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::HealthReport;

/// What the client knows about the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// Not probed yet, or probing is disabled.
    #[default]
    Unknown,
    /// The health route answered; carries the server's message.
    Online(Option<String>),
    /// The health route failed or reported a non-ok status.
    Offline,
}

impl ApiStatus {
    /// Derive the status from a health probe result.
    #[must_use]
    pub fn from_probe(probe: &Result<HealthReport>) -> Self {
        match probe {
            Ok(report) if is_healthy(&report.status) => Self::Online(report.message.clone()),
            _ => Self::Offline,
        }
    }

    /// Short label for the header badge.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "checking",
            Self::Online(_) => "online",
            Self::Offline => "offline",
        }
    }
}

fn is_healthy(status: &str) -> bool {
    status.eq_ignore_ascii_case("ok") || status.eq_ignore_ascii_case("healthy")
}
