//! Header component.

use leptos::prelude::*;
use shortlink_core::ApiStatus;

/// Application header with the API status badge.
#[component]
pub fn Header(
    /// Backend reachability.
    api_status: ReadSignal<ApiStatus>,
    /// Whether the badge is shown at all.
    #[prop(default = true)]
    show_status: bool,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="logo">
                <span class="logo-text">"Shortlink"</span>
                <span class="logo-tagline">"Long links, made short."</span>
            </div>
            {show_status.then(|| view! { <ApiStatusBadge status=api_status /> })}
        </header>
    }
}

/// Badge reflecting the last health probe.
#[component]
fn ApiStatusBadge(
    /// Backend reachability.
    status: ReadSignal<ApiStatus>,
) -> impl IntoView {
    move || {
        let current = status.get();
        let label = current.label();
        let title = match current {
            ApiStatus::Online(Some(message)) => message,
            ApiStatus::Online(None) => "API is reachable".to_string(),
            ApiStatus::Offline => "API is not reachable".to_string(),
            ApiStatus::Unknown => "Checking API".to_string(),
        };

        view! {
            <span
                class=format!("api-status api-status-{label}")
                title=title
                data-testid="api-status"
            >
                <span class="api-status-dot"></span>
                {label}
            </span>
        }
    }
}
