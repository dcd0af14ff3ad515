//! Settings dialog state.
//!
//! The form only lives while the dialog is open. Opening arms a single
//! listener slot for `settings_loaded`; the first delivery fills the form and
//! disarms it. Re-opening re-arms the same slot, so repeated opens can never
//! stack listeners.

use common::model::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ReadarrAddress,
    ReadarrApiKey,
    RootFolderPath,
    GoogleBooksApiKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsDialog {
    open: bool,
    form: Settings,
    listening: bool,
    saved_visible: bool,
    saved_generation: u64,
}

impl SettingsDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &Settings {
        &self.form
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Number of active `settings_loaded` listeners: zero or one.
    pub fn listener_count(&self) -> usize {
        usize::from(self.listening)
    }

    pub fn saved_visible(&self) -> bool {
        self.saved_visible
    }

    pub fn open(&mut self, listen: bool) {
        self.open = true;
        self.listening = listen;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.listening = false;
        self.saved_visible = false;
        self.form = Settings::default();
    }

    /// Fills the form if a listener is armed. Returns whether it was consumed.
    pub fn deliver(&mut self, settings: Settings) -> bool {
        if !self.listening {
            return false;
        }
        self.form = settings;
        self.listening = false;
        true
    }

    pub fn edit(&mut self, field: SettingsField, value: String) {
        let slot = match field {
            SettingsField::ReadarrAddress => &mut self.form.readarr_address,
            SettingsField::ReadarrApiKey => &mut self.form.readarr_api_key,
            SettingsField::RootFolderPath => &mut self.form.root_folder_path,
            SettingsField::GoogleBooksApiKey => &mut self.form.google_books_api_key,
        };
        *slot = value;
    }

    /// Shows the saved message and returns the generation its hide timer
    /// must present.
    pub fn show_saved(&mut self) -> u64 {
        self.saved_generation += 1;
        self.saved_visible = true;
        self.saved_generation
    }

    pub fn hide_saved(&mut self, generation: u64) {
        if generation == self.saved_generation {
            self.saved_visible = false;
        }
    }
}
