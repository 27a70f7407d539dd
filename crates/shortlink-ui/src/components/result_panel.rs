//! Result area below the form.

use leptos::prelude::*;
use shortlink_core::{IN_PROGRESS_MESSAGE, SUCCESS_HEADING, SubmissionState};

use crate::components::{CopyButton, UrlLink};

/// CSS class of the result area for a state.
const fn result_class(state: &SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "result result-idle",
        SubmissionState::InFlight => "result result-pending",
        SubmissionState::Success(_) => "result result-success",
        SubmissionState::Failure(_) => "result result-error",
    }
}

/// Shows the in-progress indicator, the new short URL, or the error.
#[component]
pub fn ResultPanel(
    /// Current submission state.
    state: ReadSignal<SubmissionState>,
    /// Copy handler for the short URL.
    on_copy: Callback<String>,
    /// Open links in a new tab.
    #[prop(default = true)]
    new_tab: bool,
) -> impl IntoView {
    move || {
        let current = state.get();
        let class = result_class(&current);

        let body = match current {
            SubmissionState::Idle => ().into_any(),
            SubmissionState::InFlight => view! {
                <p class="result-progress">{IN_PROGRESS_MESSAGE}</p>
            }
            .into_any(),
            SubmissionState::Success(result) => view! {
                <p class="result-heading">{SUCCESS_HEADING}</p>
                <p class="result-line">
                    <span class="result-label">"Original: "</span>
                    <UrlLink link=result.original new_tab=new_tab class="url-original" />
                </p>
                <p class="result-line">
                    <span class="result-label">"Short: "</span>
                    <UrlLink link=result.short new_tab=new_tab class="url-short" />
                </p>
                <CopyButton
                    text=result.copy_text
                    label="Copy Short URL"
                    class="btn-primary"
                    on_copy=on_copy
                />
            }
            .into_any(),
            SubmissionState::Failure(message) => view! {
                <p class="result-error-text" role="alert">{message}</p>
            }
            .into_any(),
        };

        view! {
            <div class=class aria-live="polite" data-testid="result">
                {body}
            </div>
        }
    }
}
