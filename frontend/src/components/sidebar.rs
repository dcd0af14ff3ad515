//! Library checklist sidebar with the refresh and start/stop controls.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::dashboard::{Dashboard, Intent};

use super::sheet::{Sheet, SheetKind};

pub fn sidebar(dashboard: &Dashboard, on_intent: &Callback<Intent>) -> Html {
    let checklist = dashboard.checklist();
    let run = dashboard.run();
    let entries_enabled = dashboard.checklist_enabled();

    let on_select_all = on_intent.reform(|event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Intent::SetAllEntries(input.checked())
    });

    html! {
        <Sheet
            id="readarr-sidebar"
            kind={SheetKind::Offcanvas}
            open={dashboard.sidebar_open()}
            on_dismiss={on_intent.reform(|_: ()| Intent::CloseSidebar)}
        >
            <div class="offcanvas-header">
                <h5 class="offcanvas-title">{ "Readarr" }</h5>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    onclick={on_intent.reform(|_: MouseEvent| Intent::CloseSidebar)}
                />
            </div>
            <div class="offcanvas-body d-flex flex-column">
                <div class="d-flex gap-2 mb-3">
                    <button
                        id="readarr-get-books-button"
                        type="button"
                        class="btn btn-primary"
                        disabled={!dashboard.refresh_enabled()}
                        onclick={on_intent.reform(|_: MouseEvent| Intent::RequestBookList)}
                    >
                        { "Get Books" }
                    </button>
                    <button
                        id="start-stop-button"
                        type="button"
                        class={classes!("btn", run.button_class())}
                        disabled={!dashboard.run_button_enabled()}
                        onclick={on_intent.reform(|_: MouseEvent| Intent::ToggleRun)}
                    >
                        { run.button_label() }
                    </button>
                </div>
                <div class="d-flex align-items-center gap-2 mb-2">
                    if checklist.is_fetching() {
                        <div
                            id="readarr-spinner"
                            class="spinner-border spinner-border-sm"
                            role="status"
                        ></div>
                    }
                    <span id="readarr-status">{ checklist.status_text() }</span>
                </div>
                if checklist.select_all_visible() {
                    <div id="readarr-select-all-container" class="form-check mb-2">
                        <input
                            id="readarr-select-all"
                            class="form-check-input"
                            type="checkbox"
                            checked={checklist.select_all()}
                            disabled={!entries_enabled}
                            onchange={on_select_all}
                        />
                        <label class="form-check-label" for="readarr-select-all">
                            { "Select All" }
                        </label>
                    </div>
                }
                <div id="readarr-item-list" class="overflow-auto">
                    { for checklist.entries().iter().enumerate().map(|(index, entry)| {
                        let id = format!("readarr-item-{index}");
                        let on_change = on_intent.reform(move |event: Event| {
                            let input: HtmlInputElement = event.target_unchecked_into();
                            Intent::ToggleEntry { index, checked: input.checked() }
                        });
                        html! {
                            <div class="form-check">
                                <input
                                    id={id.clone()}
                                    class="form-check-input"
                                    type="checkbox"
                                    checked={entry.checked}
                                    disabled={!entries_enabled}
                                    onchange={on_change}
                                />
                                <label class="form-check-label" for={id}>{ &entry.name }</label>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </Sheet>
    }
}
