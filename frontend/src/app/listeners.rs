//! Window event listeners that detach themselves when dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};
use yew::Callback;

/// Events that may bring the page bottom into view.
const SCROLL_EVENTS: [&str; 3] = ["scroll", "touchmove", "touchend"];

pub struct WindowListener {
    window: Window,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(
        window: &Window,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        match window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                window: window.clone(),
                event,
                closure,
            }),
            Err(err) => {
                log::warn!("could not listen for `{event}`: {err:?}");
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let listener = self.closure.as_ref().unchecked_ref();
        if let Err(err) = self.window.remove_event_listener_with_callback(self.event, listener) {
            log::warn!("could not detach `{}` listener: {err:?}", self.event);
        }
    }
}

/// True when the viewport bottom is within `threshold_px` of the page end.
pub fn reached_bottom(
    viewport_height: f64,
    scroll_y: f64,
    page_height: f64,
    threshold_px: f64,
) -> bool {
    viewport_height + scroll_y >= page_height - threshold_px
}

/// Calls `on_bottom` whenever a scroll or touch leaves the page scrolled to
/// its end. The callback may fire many times; callers debounce.
pub fn infinite_scroll(threshold_px: f64, on_bottom: Callback<()>) -> Vec<WindowListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    SCROLL_EVENTS
        .iter()
        .filter_map(|&event| {
            let window_for_handler = window.clone();
            let on_bottom = on_bottom.clone();
            WindowListener::new(&window, event, move |_| {
                if at_page_bottom(&window_for_handler, threshold_px) {
                    on_bottom.emit(());
                }
            })
        })
        .collect()
}

fn at_page_bottom(window: &Window, threshold_px: f64) -> bool {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let page_height = window
        .document()
        .and_then(|document| document.body())
        .map(|body| f64::from(body.offset_height()))
        .unwrap_or(f64::MAX);
    reached_bottom(viewport_height, scroll_y, page_height, threshold_px)
}
