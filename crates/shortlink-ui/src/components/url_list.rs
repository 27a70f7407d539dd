//! URL list component showing every stored mapping.

use leptos::prelude::*;
use shortlink_core::{ListDisplay, ListEntry, ListView};

use crate::components::empty_state::{
    EmptyState, EmptyStateIcon, EmptyStateSize, NoUrlsEmptyState, UrlsUnavailableEmptyState,
};
use crate::components::{CopyButton, UrlLink};

/// Summary line above the list.
fn summary_text(count: usize, total_clicks: u64) -> String {
    let noun = if count == 1 { "URL" } else { "URLs" };
    if total_clicks == 0 {
        format!("{count} shortened {noun}")
    } else {
        let clicks = if total_clicks == 1 { "click" } else { "clicks" };
        format!("{count} shortened {noun} • {total_clicks} {clicks}")
    }
}

/// A single row of the list.
#[component]
fn UrlListItem(
    /// The entry to display.
    entry: ListEntry,
    /// Copy handler for the short URL.
    on_copy: Callback<String>,
    /// Open links in a new tab.
    new_tab: bool,
) -> impl IntoView {
    let ListEntry {
        original,
        short,
        copy_text,
        click_count,
    } = entry;

    view! {
        <li class="url-item" data-testid="url-item">
            <div class="url-item-original">
                <span class="url-item-label">"Original:"</span>
                " "
                <UrlLink link=original new_tab=new_tab class="url-original" />
            </div>
            <div class="url-item-short">
                <span class="url-item-label">"Short:"</span>
                " "
                <UrlLink link=short new_tab=new_tab class="url-short" />
                {click_count.map(|clicks| view! {
                    <span class="url-item-clicks" title="Clicks">{clicks}</span>
                })}
                <CopyButton text=copy_text on_copy=on_copy />
            </div>
        </li>
    }
}

/// The list of shortened URLs with its refresh control.
///
/// A failed refresh leaves a previously loaded list in place.
#[component]
pub fn UrlList(
    /// What the list area shows.
    #[prop(into)]
    display: Signal<ListDisplay>,
    /// Copy handler for short URLs.
    on_copy: Callback<String>,
    /// Re-fetch the list.
    on_refresh: Callback<()>,
    /// Open links in a new tab.
    #[prop(default = true)]
    new_tab: bool,
) -> impl IntoView {
    view! {
        <section class="url-list" data-testid="url-list">
            <header class="url-list-header">
                <h2 class="url-list-title">"Shortened URLs"</h2>
                <button
                    type="button"
                    class="btn btn-secondary btn-sm"
                    on:click=move |_| on_refresh.run(())
                    data-testid="refresh-urls"
                >
                    "Refresh"
                </button>
            </header>
            {move || match display.get() {
                ListDisplay::Loading => view! {
                    <EmptyState
                        icon=EmptyStateIcon::Loading
                        message="Loading URLs..."
                        size=EmptyStateSize::Small
                    />
                }
                .into_any(),
                ListDisplay::Unavailable => view! { <UrlsUnavailableEmptyState /> }.into_any(),
                ListDisplay::Ready(ListView::Placeholder) => view! { <NoUrlsEmptyState /> }.into_any(),
                ListDisplay::Ready(list) => {
                    let summary = summary_text(list.len(), list.total_clicks());
                    view! {
                        <p class="url-list-summary">{summary}</p>
                        <ul class="url-list-items">
                            {list
                                .into_entries()
                                .into_iter()
                                .map(|entry| view! {
                                    <UrlListItem entry=entry on_copy=on_copy new_tab=new_tab />
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
