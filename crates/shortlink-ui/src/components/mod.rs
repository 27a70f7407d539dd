//! UI components for the `Shortlink` application.

pub mod empty_state;
pub mod header;
pub mod message_box;
pub mod result_panel;
pub mod shorten_form;
pub mod url_link;
pub mod url_list;

pub use empty_state::{
    EmptyState, EmptyStateIcon, EmptyStateSize, NoUrlsEmptyState, UrlsUnavailableEmptyState,
};
pub use header::Header;
pub use message_box::{MessageBox, NotificationContext, NotificationProvider, use_notifications};
pub use result_panel::ResultPanel;
pub use shorten_form::ShortenForm;
pub use url_link::{CopyButton, UrlLink};
pub use url_list::UrlList;
