//! Main application component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shortlink_core::{PageController, SubmissionState};

use crate::api::{HttpUrlApi, load_config};
use crate::clipboard::DomClipboard;
use crate::components::{
    Header, NotificationProvider, ResultPanel, ShortenForm, UrlList, use_notifications,
};
use crate::state::{Controller, SignalView};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <NotificationProvider>
            <AppContent />
        </NotificationProvider>
    }
}

/// Inner application content with access to the notification context.
#[component]
fn AppContent() -> impl IntoView {
    let notifications = use_notifications();
    let config = load_config();
    let new_tab = config.open_links_in_new_tab;
    let check_health = config.check_health;

    let page = SignalView::new(notifications);
    let controller: StoredValue<Controller> = StoredValue::new(PageController::new(
        HttpUrlApi::new(config),
        DomClipboard,
        page,
    ));

    let refresh_list = move || {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.refresh_list().await;
        });
    };

    let on_submit = Callback::new(move |original_url: String| {
        let controller = controller.get_value();
        spawn_local(async move {
            let state = controller.submit_shorten(&original_url).await;
            leptos::logging::log!("Submission finished: {:?}", state);
        });
    });

    let on_copy = Callback::new(move |text: String| {
        controller.with_value(|controller| {
            controller.copy_to_clipboard(&text);
        });
    });

    let on_refresh = Callback::new(move |()| refresh_list());

    // Load the list (and probe the API) once on mount
    Effect::new(move || {
        refresh_list();

        if check_health {
            let controller = controller.get_value();
            spawn_local(async move {
                let status = controller.check_health().await;
                leptos::logging::log!("API status: {}", status.label());
            });
        }
    });

    let list_display = Signal::derive(move || page.list_display());
    let pending = Signal::derive(move || page.submission.with(SubmissionState::is_in_flight));

    view! {
        <div class="app">
            <Header api_status=page.api_status.read_only() show_status=check_health />
            <main class="app-main">
                <section class="card shorten-card">
                    <h1 class="card-title">"Shorten a URL"</h1>
                    <ShortenForm on_submit=on_submit pending=pending />
                    <ResultPanel
                        state=page.submission.read_only()
                        on_copy=on_copy
                        new_tab=new_tab
                    />
                </section>
                <section class="card list-card">
                    <UrlList
                        display=list_display
                        on_copy=on_copy
                        on_refresh=on_refresh
                        new_tab=new_tab
                    />
                </section>
            </main>
        </div>
    }
}
