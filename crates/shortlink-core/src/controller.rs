//! The page controller.
//!
//! Each user-facing operation is a method here. The controller owns its
//! collaborators (API client, clipboard, view) and never lets an error
//! escape: every failure ends up as something the user can see.

use tracing::{debug, info, warn};

use crate::api::UrlApi;
use crate::clipboard::{COPY_FAILURE, COPY_SUCCESS, Clipboard};
use crate::health::ApiStatus;
use crate::list::{ListView, list_failure_message};
use crate::models::ShortenRequest;
use crate::notification::{Notice, Notifier};
use crate::submission::{ResultView, SubmissionState, shorten_failure_message};

/// Everything the controller renders into.
pub trait PageView: Notifier {
    /// Replace the displayed URL list.
    fn render_list(&self, view: ListView);

    /// Record that a list fetch failed. The displayed list is left as is.
    fn render_list_failure(&self);

    /// Show the current submission state in the result area.
    fn render_submission(&self, state: SubmissionState);

    /// Show the API status badge.
    fn render_api_status(&self, status: ApiStatus);
}

/// Sequences the list, shorten, copy and health operations.
#[derive(Debug, Clone)]
pub struct PageController<A, C, V> {
    api: A,
    clipboard: C,
    view: V,
}

impl<A, C, V> PageController<A, C, V>
where
    A: UrlApi,
    C: Clipboard,
    V: PageView,
{
    /// Create a controller over explicit collaborators.
    pub const fn new(api: A, clipboard: C, view: V) -> Self {
        Self {
            api,
            clipboard,
            view,
        }
    }

    /// The API client.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// The view being rendered into.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Fetch all URLs and replace the list.
    ///
    /// On failure the list is left as it was and a notice is shown.
    /// Returns whether the list was replaced.
    pub async fn refresh_list(&self) -> bool {
        debug!("Fetching URL list");
        match self.api.list_urls().await {
            Ok(records) => {
                info!(count = records.len(), "Fetched URL list");
                self.view.render_list(ListView::from_records(&records));
                true
            }
            Err(e) => {
                warn!(error = %e, kind = %e.kind(), "Failed to fetch URL list");
                self.view.notify(Notice::error(list_failure_message(&e)));
                self.view.render_list_failure();
                false
            }
        }
    }

    /// Submit `original_url` for shortening.
    ///
    /// Renders `InFlight` first, then exactly one terminal state. A
    /// successful submission is followed by one list refresh, issued after
    /// the response has arrived. Returns the terminal state.
    pub async fn submit_shorten(&self, original_url: &str) -> SubmissionState {
        self.view.render_submission(SubmissionState::InFlight);

        let request = ShortenRequest::new(original_url);
        let state = match self.api.shorten(&request).await {
            Ok(record) => {
                info!(short_url = %record.short_url, "Shortened URL");
                SubmissionState::Success(ResultView::from(&record))
            }
            Err(e) => {
                warn!(error = %e, kind = %e.kind(), "Failed to shorten URL");
                SubmissionState::Failure(shorten_failure_message(&e))
            }
        };

        self.view.render_submission(state.clone());

        if matches!(state, SubmissionState::Success(_)) {
            self.refresh_list().await;
        }

        state
    }

    /// Copy `text` to the clipboard and report the outcome.
    ///
    /// Always shows exactly one notice, which is also returned.
    pub fn copy_to_clipboard(&self, text: &str) -> Notice {
        let notice = match self.clipboard.copy_text(text) {
            Ok(()) => {
                debug!("Copied to clipboard");
                Notice::success(COPY_SUCCESS)
            }
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                Notice::error(COPY_FAILURE)
            }
        };
        self.view.notify(notice.clone());
        notice
    }

    /// Probe the API and update the status badge.
    pub async fn check_health(&self) -> ApiStatus {
        let probe = self.api.health().await;
        if let Err(e) = &probe {
            debug!(error = %e, "Health probe failed");
        }
        let status = ApiStatus::from_probe(&probe);
        self.view.render_api_status(status.clone());
        status
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::error::{Error, Result};
    use crate::models::{HealthReport, UrlRecord};

    struct NoopApi;

    impl UrlApi for NoopApi {
        async fn list_urls(&self) -> Result<Vec<UrlRecord>> {
            Ok(vec![])
        }

        async fn shorten(&self, request: &ShortenRequest) -> Result<UrlRecord> {
            Ok(UrlRecord::new(&request.original_url, "https://s.ly/x"))
        }

        async fn health(&self) -> Result<HealthReport> {
            Err(Error::Transport("unreachable".to_string()))
        }
    }

    #[derive(Default)]
    struct NoticeLog {
        notices: RefCell<Vec<Notice>>,
        statuses: RefCell<Vec<ApiStatus>>,
    }

    impl Notifier for NoticeLog {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    impl PageView for NoticeLog {
        fn render_list(&self, _view: ListView) {}

        fn render_list_failure(&self) {}

        fn render_submission(&self, _state: SubmissionState) {}

        fn render_api_status(&self, status: ApiStatus) {
            self.statuses.borrow_mut().push(status);
        }
    }

    #[test]
    fn test_copy_success_shows_confirmation() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_copy_text()
            .withf(|text: &str| text == "https://s.ly/abc")
            .times(1)
            .returning(|_| Ok(()));

        let controller = PageController::new(NoopApi, clipboard, NoticeLog::default());
        let notice = controller.copy_to_clipboard("https://s.ly/abc");

        assert_eq!(notice, Notice::success(COPY_SUCCESS));
        assert_eq!(*controller.view().notices.borrow(), vec![notice]);
    }

    #[test]
    fn test_copy_failure_asks_for_manual_copy() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_copy_text()
            .times(1)
            .returning(|_| Err(Error::Clipboard("execCommand returned false".to_string())));

        let controller = PageController::new(NoopApi, clipboard, NoticeLog::default());
        let notice = controller.copy_to_clipboard("https://s.ly/abc");

        assert!(notice.is_error());
        assert_eq!(notice.message, COPY_FAILURE);
        assert_eq!(controller.view().notices.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_health_probe_marks_offline_without_notice() {
        let controller = PageController::new(NoopApi, MockClipboard::new(), NoticeLog::default());
        let status = controller.check_health().await;

        assert_eq!(status, ApiStatus::Offline);
        assert_eq!(*controller.view().statuses.borrow(), vec![ApiStatus::Offline]);
        assert!(controller.view().notices.borrow().is_empty());
    }
}
