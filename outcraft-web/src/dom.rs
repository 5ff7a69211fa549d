use outcraft_core::Navigate;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Milliseconds since the Unix epoch from the browser clock.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Date.now() is a non-negative integer
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the window is missing, the fetch request fails, or the
/// result cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body stream fails or is not textual.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Open `url` in a new browsing context without an opener reference.
pub fn open_new_tab(url: &str) {
    let Some(win) = window() else {
        return;
    };
    if let Err(err) =
        win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
    {
        log::warn!("could not open {url}: {}", js_error_message(&err));
    }
}

/// Navigates the current tab, leaving the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(win) = window() else {
            return;
        };
        if let Err(err) = win.location().set_href(url) {
            log::error!("navigation to {url} failed: {}", js_error_message(&err));
        }
    }
}
