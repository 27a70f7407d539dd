//! Message box component - the page's single notification surface.
//!
//! Shows one message at a time. A new message replaces the current one,
//! and only the close button hides it.

use leptos::prelude::*;
use shortlink_core::{Notice, NoticeKind, NotificationSurface, Notifier};

/// Context for the notification surface, shared across the application.
#[derive(Clone, Copy)]
pub struct NotificationContext {
    surface: RwSignal<NotificationSurface>,
}

impl NotificationContext {
    /// Create a new notification context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: RwSignal::new(NotificationSurface::new()),
        }
    }

    /// Show a notice, replacing the current one.
    pub fn show(&self, notice: Notice) {
        self.surface.update(|surface| surface.show(notice));
    }

    /// Hide the current notice.
    pub fn dismiss(&self) {
        self.surface.update(NotificationSurface::dismiss);
    }

    /// The notice currently displayed.
    pub fn current(&self) -> Option<Notice> {
        self.surface.with(|surface| surface.current().cloned())
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationContext {
    fn notify(&self, notice: Notice) {
        self.show(notice);
    }
}

/// CSS class for a notice kind.
const fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "message-box message-box-info",
        NoticeKind::Success => "message-box message-box-success",
        NoticeKind::Error => "message-box message-box-error",
    }
}

/// The message box itself.
///
/// Renders nothing while no notice is displayed.
#[component]
pub fn MessageBox() -> impl IntoView {
    let ctx = expect_context::<NotificationContext>();

    move || {
        ctx.current().map(|notice| {
            let kind = notice.kind;
            let role = if notice.is_error() { "alert" } else { "status" };
            view! {
                <div
                    class=kind_class(kind)
                    role=role
                    aria-live="polite"
                    data-testid="message-box"
                    data-kind=kind.to_string()
                >
                    <div class="message-box-icon">
                        {match kind {
                            NoticeKind::Info => view! {
                                <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                    <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z"/>
                                </svg>
                            }.into_any(),
                            NoticeKind::Success => view! {
                                <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                    <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z"/>
                                </svg>
                            }.into_any(),
                            NoticeKind::Error => view! {
                                <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                    <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"/>
                                </svg>
                            }.into_any(),
                        }}
                    </div>
                    <p class="message-box-text" data-testid="message-text">{notice.message}</p>
                    <button
                        class="message-box-close btn btn-ghost btn-icon"
                        on:click=move |_| ctx.dismiss()
                        aria-label="Close message"
                        data-testid="message-close"
                    >
                        <svg viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
                            <path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/>
                        </svg>
                    </button>
                </div>
            }
        })
    }
}

/// Provider component that sets up the notification context.
///
/// Wrap the application with this component to enable notifications.
#[component]
pub fn NotificationProvider(
    /// Child components that can access the notification context.
    children: Children,
) -> impl IntoView {
    let ctx = NotificationContext::new();
    provide_context(ctx);

    view! {
        {children()}
        <MessageBox />
    }
}

/// Hook to access the notification context.
///
/// # Panics
/// Panics if called outside of a `NotificationProvider`.
pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}
