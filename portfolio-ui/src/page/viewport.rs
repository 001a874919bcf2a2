use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::interop::get_viewport_width;

const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

/// Window resize subscription. Dropping it removes the listeners.
pub struct ResizeListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

impl ResizeListener {
    /// Calls `on_width` with the new viewport width after each resize.
    /// With `debounce_ms > 0` only the last resize of a burst is reported.
    pub fn register<F>(debounce_ms: u32, on_width: F) -> Option<Self>
    where
        F: Fn(u32) + 'static,
    {
        let window = web_sys::window()?;
        let on_width = Rc::new(on_width);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let pending_for_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if debounce_ms == 0 {
                if let Some(width) = get_viewport_width() {
                    on_width(width);
                }
                return;
            }

            let on_width = on_width.clone();
            // Replacing the previous timeout drops it, which cancels it.
            *pending_for_cb.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
                if let Some(width) = get_viewport_width() {
                    on_width(width);
                }
            }));
        }) as Box<dyn FnMut(web_sys::Event)>);

        for event in VIEWPORT_EVENTS {
            if let Err(e) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                dioxus_logger::tracing::error!("Failed to listen for {}: {:?}", event, e);
            }
        }
        dioxus_logger::tracing::debug!("Viewport listener registered");

        Some(Self {
            window,
            callback,
            _pending: pending,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        for event in VIEWPORT_EVENTS {
            let _ = self.window.remove_event_listener_with_callback(
                event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
        dioxus_logger::tracing::debug!("Viewport listener removed");
    }
}
