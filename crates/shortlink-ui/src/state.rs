//! Signal-backed page state.
//!
//! [`SignalView`] is the [`PageView`] the controller renders into; the
//! components read the same signals.

use leptos::prelude::*;
use shortlink_core::{
    ApiStatus, ListDisplay, ListView, Notice, Notifier, PageController, PageView, SubmissionState,
};

use crate::api::HttpUrlApi;
use crate::clipboard::DomClipboard;
use crate::components::NotificationContext;

/// The controller as wired in the browser.
pub type Controller = PageController<HttpUrlApi, DomClipboard, SignalView>;

/// Reactive state of the page.
#[derive(Clone, Copy)]
pub struct SignalView {
    /// The URL list; `None` until the first fetch succeeds.
    pub list: RwSignal<Option<ListView>>,
    /// Whether the latest list fetch failed.
    pub list_failed: RwSignal<bool>,
    /// The shorten submission state.
    pub submission: RwSignal<SubmissionState>,
    /// Backend reachability.
    pub api_status: RwSignal<ApiStatus>,
    /// The shared notification surface.
    pub notifications: NotificationContext,
}

impl SignalView {
    /// Create fresh page state reporting into `notifications`.
    #[must_use]
    pub fn new(notifications: NotificationContext) -> Self {
        Self {
            list: RwSignal::new(None),
            list_failed: RwSignal::new(false),
            submission: RwSignal::new(SubmissionState::Idle),
            api_status: RwSignal::new(ApiStatus::Unknown),
            notifications,
        }
    }

    /// What the list area should show right now.
    pub fn list_display(&self) -> ListDisplay {
        ListDisplay::select(self.list.get(), self.list_failed.get())
    }
}

impl std::fmt::Debug for SignalView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalView").finish_non_exhaustive()
    }
}

impl Notifier for SignalView {
    fn notify(&self, notice: Notice) {
        self.notifications.notify(notice);
    }
}

impl PageView for SignalView {
    fn render_list(&self, view: ListView) {
        self.list.set(Some(view));
        self.list_failed.set(false);
    }

    fn render_list_failure(&self) {
        self.list_failed.set(true);
    }

    fn render_submission(&self, state: SubmissionState) {
        self.submission.set(state);
    }

    fn render_api_status(&self, status: ApiStatus) {
        self.api_status.set(status);
    }
}
