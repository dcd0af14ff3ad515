use yew::prelude::*;

use crate::dashboard::preferences::ThemePreference;
use crate::dashboard::Intent;

pub fn navbar(theme: ThemePreference, on_intent: &Callback<Intent>) -> Html {
    html! {
        <nav class="navbar sticky-top bg-body-tertiary border-bottom">
            <div class="container-fluid">
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    aria-controls="readarr-sidebar"
                    onclick={on_intent.reform(|_: MouseEvent| Intent::OpenSidebar)}
                >
                    { "Readarr" }
                </button>
                <span class="navbar-brand mb-0 h1">{ "eBookBuddy" }</span>
                <div class="d-flex align-items-center gap-3">
                    <div class="form-check form-switch mb-0">
                        <input
                            id="theme-switch"
                            class="form-check-input"
                            type="checkbox"
                            role="switch"
                            checked={theme.switch_on}
                            onchange={on_intent.reform(|_: Event| Intent::ToggleTheme)}
                        />
                        <label class="form-check-label" for="theme-switch">{ "Dark" }</label>
                    </div>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        onclick={on_intent.reform(|_: MouseEvent| Intent::OpenSettings)}
                    >
                        { "Settings" }
                    </button>
                </div>
            </div>
        </nav>
    }
}
