//! Browser-only checks. Run with `wasm-pack test --headless --firefox portfolio-ui`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use portfolio_model::{PreferenceSlot, PreferenceStore, DARK_MODE_CLASS};
use portfolio_ui::page::storage::LocalStorageSlot;
use portfolio_ui::page::viewport::ResizeListener;
use portfolio_ui::{get_viewport_width, root_has_class, set_root_class};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "portfolio-test-darkMode";

#[wasm_bindgen_test]
fn local_storage_round_trips_theme_flag() {
    let store = PreferenceStore::new(LocalStorageSlot, TEST_KEY);

    store.save(false);
    assert_eq!(LocalStorageSlot.read(TEST_KEY).unwrap().as_deref(), Some("false"));
    assert_eq!(store.load(), Some(false));

    store.save(true);
    assert_eq!(store.load(), Some(true));
}

#[wasm_bindgen_test]
fn unexpected_stored_value_means_light_mode() {
    let store = PreferenceStore::new(LocalStorageSlot, TEST_KEY);

    LocalStorageSlot.write(TEST_KEY, "dark").unwrap();
    assert_eq!(store.load(), Some(false));

    LocalStorageSlot.write(TEST_KEY, "").unwrap();
    assert_eq!(store.load(), None);
}

#[wasm_bindgen_test]
fn root_marker_toggles() {
    set_root_class(DARK_MODE_CLASS, true);
    assert!(root_has_class(DARK_MODE_CLASS));
    set_root_class(DARK_MODE_CLASS, false);
    assert!(!root_has_class(DARK_MODE_CLASS));
}

#[wasm_bindgen_test]
fn viewport_width_is_measurable() {
    assert!(get_viewport_width().is_some());
}

fn fire(event: &str) {
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new(event).unwrap();
    window.dispatch_event(&event).unwrap();
}

fn counting_listener(debounce_ms: u32) -> (ResizeListener, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let listener = ResizeListener::register(debounce_ms, move |width| {
        assert!(width > 0);
        counter.set(counter.get() + 1);
    })
    .unwrap();
    (listener, calls)
}

#[wasm_bindgen_test]
fn resize_and_orientation_change_reach_the_callback() {
    let (listener, calls) = counting_listener(0);

    fire("resize");
    assert_eq!(calls.get(), 1);
    fire("orientationchange");
    assert_eq!(calls.get(), 2);

    drop(listener);
}

#[wasm_bindgen_test]
fn dropped_listener_stops_receiving_events() {
    let (listener, calls) = counting_listener(0);
    fire("resize");
    assert_eq!(calls.get(), 1);

    drop(listener);
    fire("resize");
    fire("orientationchange");
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
async fn debounced_burst_reports_once() {
    let (listener, calls) = counting_listener(20);

    for _ in 0..5 {
        fire("resize");
    }
    assert_eq!(calls.get(), 0);

    TimeoutFuture::new(100).await;
    assert_eq!(calls.get(), 1);

    drop(listener);
}

#[wasm_bindgen_test]
async fn dropping_cancels_a_pending_debounce() {
    let (listener, calls) = counting_listener(20);
    fire("resize");
    drop(listener);

    TimeoutFuture::new(100).await;
    assert_eq!(calls.get(), 0);
}
