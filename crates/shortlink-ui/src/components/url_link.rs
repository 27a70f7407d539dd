//! Link and copy-button building blocks shared by the result panel and the list.

use leptos::prelude::*;
use shortlink_core::Link;

/// `target` attribute for rendered links.
const fn link_target(new_tab: bool) -> Option<&'static str> {
    if new_tab { Some("_blank") } else { None }
}

/// `rel` attribute for rendered links.
const fn link_rel(new_tab: bool) -> Option<&'static str> {
    if new_tab {
        Some("noopener noreferrer")
    } else {
        None
    }
}

/// Renders a URL as an anchor, or as plain text when it is not navigable.
///
/// The URL always appears as a text node, never as markup.
#[component]
pub fn UrlLink(
    /// The link to render.
    link: Link,
    /// Open the link in a new tab.
    #[prop(default = true)]
    new_tab: bool,
    /// Extra CSS class.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let Link { text, href } = link;

    match href {
        Some(href) => view! {
            <a
                class=format!("url-link {class}")
                href=href
                target=link_target(new_tab)
                rel=link_rel(new_tab)
            >
                {text}
            </a>
        }
        .into_any(),
        None => view! {
            <span class=format!("url-link url-link-inert {class}") title="Not a web address">
                {text}
            </span>
        }
        .into_any(),
    }
}

/// Button that copies `text` through `on_copy`.
#[component]
pub fn CopyButton(
    /// Text to copy.
    text: String,
    /// Button label.
    #[prop(default = "Copy")]
    label: &'static str,
    /// Extra CSS class.
    #[prop(default = "btn-secondary btn-sm")]
    class: &'static str,
    /// Invoked with `text` when clicked.
    on_copy: Callback<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("btn copy-button {class}")
            on:click=move |_| on_copy.run(text.clone())
            data-testid="copy-button"
        >
            {label}
        </button>
    }
}
