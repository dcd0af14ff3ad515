use serde::{Deserialize, Serialize};

/// Connection settings edited in the settings dialog.
///
/// The server owns validation and persistence; the client only relays the
/// four strings back and forth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub readarr_address: String,
    #[serde(default)]
    pub readarr_api_key: String,
    #[serde(default)]
    pub root_folder_path: String,
    #[serde(default)]
    pub google_books_api_key: String,
}
