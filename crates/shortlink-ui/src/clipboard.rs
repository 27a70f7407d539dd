//! Clipboard access through the document's `copy` command.
//!
//! The text is placed in an off-screen `<textarea>`, selected, copied and
//! the element removed again. This needs no permission prompt and completes
//! synchronously inside the click handler.

use shortlink_core::{Clipboard, Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

/// [`Clipboard`] implementation using `document.execCommand("copy")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomClipboard;

impl Clipboard for DomClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Clipboard("document is not available".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| Error::Clipboard("document has no body".to_string()))?;

        let textarea = create_copy_source(&document, text)?;
        body.append_child(&textarea).map_err(js_error)?;

        let outcome = select_and_copy(&document, &textarea);
        textarea.remove();

        match outcome {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::Clipboard("copy command was rejected".to_string())),
            Err(e) => Err(e),
        }
    }
}

/// Build a read-only textarea positioned outside the viewport.
fn create_copy_source(document: &Document, text: &str) -> Result<HtmlTextAreaElement> {
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| Error::Clipboard("created element is not a textarea".to_string()))?;

    textarea.set_value(text);
    textarea.set_read_only(true);
    textarea
        .set_attribute("aria-hidden", "true")
        .map_err(js_error)?;

    let style = textarea.style();
    for (property, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "-9999px"),
        ("opacity", "0"),
    ] {
        style.set_property(property, value).map_err(js_error)?;
    }

    Ok(textarea)
}

fn select_and_copy(document: &Document, textarea: &HtmlTextAreaElement) -> Result<bool> {
    textarea.focus().map_err(js_error)?;
    textarea.select();

    document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| Error::Clipboard("document does not support commands".to_string()))?
        .exec_command("copy")
        .map_err(js_error)
}

fn js_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "unknown DOM error".to_string());
    Error::Clipboard(message)
}
