//! Copy-to-clipboard with a legacy fallback.
//!
//! The async Clipboard API is tried first; browsers without it (or that deny
//! it outside a secure context) fall back to selecting a detached textarea
//! and running `document.execCommand("copy")`.
use crate::dom;
use js_sys::{Function, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy fallback failed: {0}")]
    Fallback(String),
}

/// Copy `text`, trying the Clipboard API then the textarea fallback.
///
/// # Errors
///
/// Returns [`ClipboardError::Fallback`] when both mechanisms fail.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    match write_text(text).await {
        Ok(()) => Ok(()),
        Err(err) => {
            log::debug!("{err}; falling back to execCommand");
            fallback_copy(text)
        }
    }
}

#[allow(clippy::future_not_send)]
async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = dom::window()
        .ok_or(ClipboardError::Unavailable)?
        .navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(dom::js_error_message(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Rejected("writeText did not return a promise".into()))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(dom::js_error_message(&e)))
}

fn fallback_copy(text: &str) -> Result<(), ClipboardError> {
    let fail = |msg: &str| ClipboardError::Fallback(msg.to_string());
    let document = dom::document().ok_or_else(|| fail("document unavailable"))?;
    let body = document.body().ok_or_else(|| fail("no body element"))?;
    let textarea = document
        .create_element("textarea")
        .map_err(|_| fail("failed to create textarea"))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| fail("failed to cast to textarea"))?;

    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.set_attribute("style", "position:fixed;top:-1000px;left:-1000px");

    body.append_child(&textarea)
        .map_err(|_| fail("failed to append textarea"))?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| fail("document does not support execCommand"))
        .and_then(|html| {
            html.exec_command("copy")
                .map_err(|e| ClipboardError::Fallback(dom::js_error_message(&e)))
        });
    let _ = body.remove_child(&textarea);

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(fail("execCommand(copy) was refused")),
        Err(err) => Err(err),
    }
}
