//! Light/dark theme preference.

use crate::storage::{PreferenceStore, StorageError};

pub const THEME_KEY: &str = "theme";
pub const SWITCH_KEY: &str = "switch-position";

/// Value of the `data-bs-theme` attribute on the document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    pub theme: Theme,
    /// Checked state of the theme switch.
    pub switch_on: bool,
}

impl ThemePreference {
    /// Reads both keys once. Missing or unreadable values fall back to light
    /// with the switch off.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let theme = store
            .read(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        let switch_on = store
            .read(SWITCH_KEY)
            .map(|value| value.trim() == "true")
            .unwrap_or(theme == Theme::Dark);
        Self { theme, switch_on }
    }

    pub fn toggled(self) -> Self {
        let theme = self.theme.flipped();
        Self {
            theme,
            switch_on: theme == Theme::Dark,
        }
    }

    pub fn save(&self, store: &dyn PreferenceStore) -> Result<(), StorageError> {
        store.write(THEME_KEY, self.theme.as_str())?;
        store.write(SWITCH_KEY, if self.switch_on { "true" } else { "false" })
    }
}
