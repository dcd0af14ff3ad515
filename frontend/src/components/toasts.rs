//! Toast stack in the bottom-right corner.

use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::dashboard::toast::{Toast, ToastQueue};
use crate::dashboard::Intent;

pub fn toast_stack(queue: &ToastQueue, on_intent: &Callback<Intent>) -> Html {
    html! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            { for queue.toasts().iter().map(|toast| toast_view(toast, on_intent)) }
        </div>
    }
}

fn toast_view(toast: &Toast, on_intent: &Callback<Intent>) -> Html {
    let id = toast.id;
    html! {
        <div
            class="toast show"
            role="alert"
            aria-live="assertive"
            aria-atomic="true"
            key={id.to_string()}
        >
            <div class="toast-header">
                <strong class="me-auto">{ &toast.title }</strong>
                <small class="text-muted">{ local_time(toast.created_ms) }</small>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    onclick={on_intent.reform(move |_: MouseEvent| Intent::DismissToast(id))}
                />
            </div>
            <div class="toast-body">{ &toast.message }</div>
        </div>
    }
}

fn local_time(created_ms: f64) -> String {
    Date::new(&JsValue::from_f64(created_ms))
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
