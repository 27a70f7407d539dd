//! Empty and loading states for the URL list.

use leptos::prelude::*;

/// Icon types for empty states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmptyStateIcon {
    /// Chain-link icon (default).
    #[default]
    Link,
    /// Hourglass icon for pending loads.
    Loading,
    /// Cloud-off icon for lists that could not be fetched.
    Unavailable,
}

/// Size variants for empty state displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmptyStateSize {
    /// Small size for inline/compact displays.
    Small,
    /// Medium size (default).
    #[default]
    Medium,
}

impl EmptyStateSize {
    const fn icon_size(self) -> &'static str {
        match self {
            Self::Small => "32",
            Self::Medium => "56",
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Small => "empty-state-small",
            Self::Medium => "empty-state-medium",
        }
    }
}

/// Renders an SVG icon based on the icon type.
#[component]
fn EmptyStateIconSvg(
    /// The type of icon to display.
    icon: EmptyStateIcon,
    /// Width and height of the icon.
    size: &'static str,
) -> impl IntoView {
    match icon {
        EmptyStateIcon::Link => view! {
            <svg viewBox="0 0 24 24" width=size height=size fill="var(--text-disabled)">
                <path d="M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z"/>
            </svg>
        }.into_any(),
        EmptyStateIcon::Loading => view! {
            <svg class="spin" viewBox="0 0 24 24" width=size height=size fill="var(--text-disabled)">
                <path d="M6 2v6h.01L6 8.01 10 12l-4 4 .01.01H6V22h12v-5.99h-.01L18 16l-4-4 4-3.99-.01-.01H18V2H6z"/>
            </svg>
        }.into_any(),
        EmptyStateIcon::Unavailable => view! {
            <svg viewBox="0 0 24 24" width=size height=size fill="var(--text-disabled)">
                <path d="M19.35 10.04C18.67 6.59 15.64 4 12 4c-1.48 0-2.85.43-4.01 1.17l1.46 1.46C10.21 6.23 11.08 6 12 6c3.04 0 5.5 2.46 5.5 5.5v.5H19c1.66 0 3 1.34 3 3 0 1.13-.64 2.11-1.56 2.62l1.45 1.45C23.16 18.16 24 16.68 24 15c0-2.64-2.05-4.78-4.65-4.96zM3 5.27l2.75 2.74C2.56 8.15 0 10.77 0 14c0 3.31 2.69 6 6 6h11.73l2 2L21 20.73 4.27 4 3 5.27zM7.73 10l8 8H6c-2.21 0-4-1.79-4-4s1.79-4 4-4h1.73z"/>
            </svg>
        }.into_any(),
    }
}

/// Base empty state component.
#[component]
pub fn EmptyState(
    /// The icon to display.
    #[prop(default = EmptyStateIcon::Link)]
    icon: EmptyStateIcon,
    /// The message to display.
    message: &'static str,
    /// Optional hint text.
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Size variant.
    #[prop(default = EmptyStateSize::Medium)]
    size: EmptyStateSize,
) -> impl IntoView {
    let full_class = format!("empty-state {}", size.class());

    view! {
        <div class=full_class data-testid="empty-state">
            <div class="empty-state-icon">
                <EmptyStateIconSvg icon=icon size=size.icon_size() />
            </div>
            <p class="empty-state-message">{message}</p>
            {hint.map(|h| view! {
                <p class="empty-state-hint">{h}</p>
            })}
        </div>
    }
}

/// Placeholder shown when the backend holds no URLs.
#[component]
pub fn NoUrlsEmptyState() -> impl IntoView {
    view! {
        <EmptyState
            icon=EmptyStateIcon::Link
            message="No URLs shortened yet."
            hint="Shorten a URL above and it will show up here."
        />
    }
}

/// Shown when the list could not be fetched and nothing was loaded before.
#[component]
pub fn UrlsUnavailableEmptyState() -> impl IntoView {
    view! {
        <EmptyState
            icon=EmptyStateIcon::Unavailable
            message="Could not load URLs."
            hint="Use Refresh to try again."
            size=EmptyStateSize::Small
        />
    }
}
