//! Document-level side effects: theme attribute, body scroll lock, scrolling.

use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dashboard::preferences::Theme;

const THEME_ATTRIBUTE: &str = "data-bs-theme";

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("could not set theme attribute: {err:?}");
        }
    }
}

/// Hides the body scrollbar and pads the body by its width so the layout
/// does not shift under an open modal.
pub fn lock_scroll() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(body) = body() else {
        return;
    };
    let viewport = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.client_width()))
        .unwrap_or(viewport);
    let scrollbar = (viewport - content).max(0.0);

    let style = body.style();
    for (property, value) in scroll_lock_properties(scrollbar) {
        if let Err(err) = style.set_property(property, &value) {
            log::warn!("could not set body {property}: {err:?}");
        }
    }
}

fn scroll_lock_properties(scrollbar: f64) -> [(&'static str, String); 2] {
    [
        ("overflow", "hidden".to_string()),
        ("padding-right", format!("{scrollbar}px")),
    ]
}

pub fn unlock_scroll() {
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    for (property, _) in scroll_lock_properties(0.0) {
        if let Err(err) = style.remove_property(property) {
            log::warn!("could not reset body {property}: {err:?}");
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Page protocol and host, used to derive the socket URL.
pub fn page_origin() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    Some((location.protocol().ok()?, location.host().ok()?))
}
