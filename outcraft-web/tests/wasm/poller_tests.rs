#![cfg(target_arch = "wasm32")]

use outcraft_core::{ServerStatus, StatusError};
use outcraft_web::status::start_polling;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        outcraft_web::dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

fn recorder() -> (Rc<RefCell<Vec<ServerStatus>>>, Callback<ServerStatus>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, Callback::from(move |s: ServerStatus| sink.borrow_mut().push(s)))
}

#[wasm_bindgen_test]
async fn polls_immediately_then_on_every_period() {
    let calls = Rc::new(Cell::new(0_u32));
    let (seen, on_update) = recorder();
    let counter = calls.clone();
    let mut handle = start_polling(
        25,
        move || {
            counter.set(counter.get() + 1);
            async { Ok::<_, StatusError>(r#"{"online":true,"players":{"now":3,"max":20}}"#.to_string()) }
        },
        on_update,
    );
    sleep(5).await;
    assert_eq!(calls.get(), 1, "first fetch runs without waiting a period");
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].player_count(), 3);

    sleep(80).await;
    assert!(calls.get() >= 3);
    handle.stop();
    assert!(!handle.is_running());

    let after_stop = calls.get();
    sleep(80).await;
    assert_eq!(calls.get(), after_stop, "no fetches after stop");
}

#[wasm_bindgen_test]
async fn failures_report_offline_on_every_tick() {
    let (seen, on_update) = recorder();
    let mut handle = start_polling(
        20,
        || async { Err::<String, _>(StatusError::Http(503)) },
        on_update,
    );
    sleep(70).await;
    handle.stop();
    let seen = seen.borrow();
    // Repeated failures keep reporting; nothing latches after the first one.
    assert!(seen.len() >= 2, "expected repeated updates, got {}", seen.len());
    for status in seen.iter() {
        assert!(!status.online);
        assert_eq!(status.error.as_deref(), Some("HTTP 503"));
    }
}

#[wasm_bindgen_test]
async fn responses_after_stop_are_discarded() {
    let (seen, on_update) = recorder();
    let mut handle = start_polling(
        1_000,
        || async {
            sleep(30).await;
            Ok::<_, StatusError>(r#"{"online":false}"#.to_string())
        },
        on_update,
    );
    handle.stop();
    sleep(60).await;
    assert!(seen.borrow().is_empty());
}
