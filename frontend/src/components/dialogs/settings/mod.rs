//! Connection settings dialog.
//!
//! Fields start empty each time the dialog opens and fill in when the server
//! answers `load_settings`. Saving sends the form as typed and flashes a
//! confirmation; the dialog itself stays open.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::sheet::{Sheet, SheetKind};
use crate::dashboard::settings::{SettingsDialog, SettingsField};
use crate::dashboard::Intent;

pub fn settings_dialog(dialog: &SettingsDialog, on_intent: &Callback<Intent>) -> Html {
    let form = dialog.form();
    let close = on_intent.reform(|_: MouseEvent| Intent::CloseSettings);
    let fields = [
        (
            "readarr-address",
            "Readarr Address",
            false,
            &form.readarr_address,
            SettingsField::ReadarrAddress,
        ),
        (
            "readarr-api-key",
            "Readarr API Key",
            true,
            &form.readarr_api_key,
            SettingsField::ReadarrApiKey,
        ),
        (
            "root-folder-path",
            "Root Folder Path",
            false,
            &form.root_folder_path,
            SettingsField::RootFolderPath,
        ),
        (
            "googlebooks-api-key",
            "Google Books API Key",
            true,
            &form.google_books_api_key,
            SettingsField::GoogleBooksApiKey,
        ),
    ]
    .into_iter()
    .map(|(id, label, secret, value, which)| field(id, label, secret, value, which, on_intent));

    html! {
        <Sheet
            id="config-modal"
            kind={SheetKind::Modal}
            open={dialog.is_open()}
            on_dismiss={on_intent.reform(|_: ()| Intent::CloseSettings)}
        >
            <div class="modal-header">
                <h5 class="modal-title">{ "Settings" }</h5>
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    onclick={close.clone()}
                />
            </div>
            <div class="modal-body">
                { for fields }
            </div>
            <div class="modal-footer">
                if dialog.saved_visible() {
                    <span id="save-message" class="text-success me-auto">{ "Settings saved" }</span>
                }
                <button type="button" class="btn btn-secondary" onclick={close}>{ "Close" }</button>
                <button
                    id="save-changes-button"
                    type="button"
                    class="btn btn-primary"
                    onclick={on_intent.reform(|_: MouseEvent| Intent::SaveSettings)}
                >
                    { "Save changes" }
                </button>
            </div>
        </Sheet>
    }
}

fn field(
    id: &'static str,
    label: &'static str,
    secret: bool,
    value: &str,
    which: SettingsField,
    on_intent: &Callback<Intent>,
) -> Html {
    let on_input = on_intent.reform(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Intent::EditSettings(which, input.value())
    });
    html! {
        <div class="mb-3">
            <label class="form-label" for={id}>{ label }</label>
            <input
                id={id}
                class="form-control"
                type={if secret { "password" } else { "text" }}
                autocomplete="off"
                value={value.to_string()}
                oninput={on_input}
            />
        </div>
    }
}
