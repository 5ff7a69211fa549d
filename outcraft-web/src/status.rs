//! Periodic server-status polling in the browser.
//!
//! [`start_polling`] runs one fetch immediately and then one per period,
//! feeding results through a [`StatusTracker`]. The returned [`PollHandle`]
//! cancels the interval on `stop()` or drop; responses still in flight at
//! that point are discarded.
use crate::dom;
use gloo::timers::callback::Interval;
use outcraft_core::constants::{POLL_INTERVAL_MS, SERVER_ADDRESS};
use outcraft_core::{ServerStatus, StatusError, StatusTracker, status_url};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Running poll; stopping is idempotent.
pub struct PollHandle {
    interval: Option<Interval>,
    tracker: Rc<RefCell<StatusTracker>>,
}

impl PollHandle {
    pub fn stop(&mut self) {
        self.tracker.borrow_mut().stop();
        // Dropping the interval clears the browser timer.
        drop(self.interval.take());
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tracker.borrow().is_running()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fetch `url` and return the body of a 2xx response.
///
/// # Errors
///
/// Returns [`StatusError::Transport`] for network failures and
/// [`StatusError::Http`] for non-2xx responses.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_status_body(url: String) -> Result<String, StatusError> {
    let transport = |e: wasm_bindgen::JsValue| StatusError::Transport(dom::js_error_message(&e));
    let response = dom::fetch_response(&url).await.map_err(transport)?;
    if !response.ok() {
        return Err(StatusError::Http(response.status()));
    }
    dom::response_text(&response).await.map_err(transport)
}

/// Start polling with `fetch`, emitting each accepted status to `on_update`.
pub fn start_polling<F, Fut>(
    period_ms: u32,
    fetch: F,
    on_update: Callback<ServerStatus>,
) -> PollHandle
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<String, StatusError>> + 'static,
{
    let tracker = Rc::new(RefCell::new(StatusTracker::new()));
    let fetch = Rc::new(fetch);

    let tick = {
        let tracker = tracker.clone();
        move || {
            let Some(ticket) = tracker.borrow_mut().begin() else {
                return;
            };
            let tracker = tracker.clone();
            let fetch = fetch.clone();
            let on_update = on_update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch().await;
                let applied = tracker
                    .borrow_mut()
                    .complete(ticket, result, dom::now_ms())
                    .cloned();
                if let Some(status) = applied {
                    on_update.emit(status);
                }
            });
        }
    };

    tick();
    let interval = Interval::new(period_ms, tick);
    log::debug!("status polling started every {period_ms} ms");

    PollHandle {
        interval: Some(interval),
        tracker,
    }
}

/// Poll the community server for as long as the calling component is mounted.
#[hook]
pub fn use_server_status(status: UseStateHandle<Option<ServerStatus>>) {
    use_effect_with((), move |()| {
        let on_update = Callback::from(move |next: ServerStatus| status.set(Some(next)));
        let mut handle = start_polling(
            POLL_INTERVAL_MS,
            || fetch_status_body(status_url(SERVER_ADDRESS)),
            on_update,
        );
        move || handle.stop()
    });
}
