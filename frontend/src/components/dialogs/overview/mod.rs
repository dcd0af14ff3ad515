use yew::prelude::*;

use crate::components::sheet::{Sheet, SheetKind};
use crate::dashboard::overview::OverviewDialog;
use crate::dashboard::Intent;

/// Book overview. Server text is rendered as plain text, one paragraph per
/// line.
pub fn overview_dialog(dialog: &OverviewDialog, on_intent: &Callback<Intent>) -> Html {
    let close = on_intent.reform(|_: MouseEvent| Intent::CloseOverview);
    html! {
        <Sheet
            id="overview-modal"
            kind={SheetKind::Modal}
            open={dialog.is_open()}
            on_dismiss={on_intent.reform(|_: ()| Intent::CloseOverview)}
        >
            <div class="modal-header">
                <h5 id="overview-modal-title" class="modal-title">{ dialog.title() }</h5>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    onclick={close.clone()}
                />
            </div>
            <div id="modal-body" class="modal-body">
                { for dialog.lines().into_iter().map(|line| html! { <p>{ line }</p> }) }
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" onclick={close}>{ "Close" }</button>
            </div>
        </Sheet>
    }
}
