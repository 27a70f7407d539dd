//! `Shortlink` Core Library
//!
//! This crate provides the target-independent half of the `Shortlink` web
//! client:
//! - Wire types for the shortening backend
//! - Response classification into a typed error taxonomy
//! - View models for the URL list, the submission result and notifications
//! - The [`PageController`] that sequences list, shorten and copy operations
//!
//! The browser build supplies the [`UrlApi`], [`Clipboard`] and
//! [`PageView`] implementations; tests supply in-memory ones.
//!
//! ```rust,ignore
//! use shortlink_core::{PageController, SubmissionState};
//!
//! let controller = PageController::new(api, clipboard, view);
//! if let SubmissionState::Failure(message) = controller.submit_shorten(url).await {
//!     // already rendered in the result area
//! }
//! ```

pub mod api;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod health;
pub mod link;
pub mod list;
pub mod models;
pub mod notification;
pub mod submission;

pub use api::{UrlApi, decode_response, is_success};
pub use clipboard::{COPY_FAILURE, COPY_SUCCESS, Clipboard};
pub use config::{ClientConfig, DEFAULT_HEALTH_PATH, DEFAULT_SHORTEN_PATH, DEFAULT_URLS_PATH};
pub use controller::{PageController, PageView};
pub use error::{Error, ErrorKind, Result};
pub use health::ApiStatus;
pub use link::{Link, NAVIGABLE_SCHEMES, is_navigable};
pub use list::{LIST_NETWORK_FAILURE, ListDisplay, ListEntry, ListView, list_failure_message};
pub use models::{ApiErrorBody, HealthReport, ShortenRequest, UrlRecord, resolve_records};
pub use notification::{Notice, NoticeKind, NotificationSurface, Notifier};
pub use submission::{
    GENERIC_FAILURE, IN_PROGRESS_MESSAGE, ResultView, SUCCESS_HEADING, SubmissionState,
    UNKNOWN_ERROR, shorten_failure_message,
};
