//! Form collecting the URL to shorten.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// The shorten form.
///
/// Submitting never navigates; the input value is handed to `on_submit`
/// unmodified. The input stays editable while a request is pending.
#[component]
pub fn ShortenForm(
    /// Invoked with the input value on submit.
    on_submit: Callback<String>,
    /// Whether a submission is pending, used for the button label only.
    #[prop(into)]
    pending: Signal<bool>,
) -> impl IntoView {
    let (original_url, set_original_url) = signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(original_url.get_untracked());
    };

    view! {
        <form class="shorten-form" on:submit=handle_submit novalidate=true data-testid="shorten-form">
            <label class="form-label" for="original-url">"Long URL"</label>
            <div class="form-row">
                <input
                    id="original-url"
                    class="form-input"
                    type="url"
                    inputmode="url"
                    autocomplete="off"
                    placeholder="https://example.com/a/very/long/path"
                    prop:value=original_url
                    on:input=move |ev| set_original_url.set(event_target_value(&ev))
                    data-testid="original-url"
                />
                <button type="submit" class="btn btn-primary" data-testid="shorten-submit">
                    {move || if pending.get() { "Shortening..." } else { "Shorten" }}
                </button>
            </div>
        </form>
    }
}
