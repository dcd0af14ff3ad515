//! Startup configuration.
//!
//! The page may embed overrides as JSON in
//! `<meta name="dashboard-config" content='{"socket_path": "/socket.io/"}'>`.
//! Every field is optional; missing fields keep their defaults.

use serde::Deserialize;
use thiserror::Error;

const META_SELECTOR: &str = r#"meta[name="dashboard-config"]"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Socket.IO endpoint path on the page's host.
    pub socket_path: String,
    /// How long a regular toast stays on screen.
    pub toast_duration_ms: u32,
    /// How long the "Settings saved" message stays visible.
    pub saved_message_ms: u32,
    /// Distance from the page bottom that counts as "scrolled to the end".
    pub scroll_threshold_px: f64,
    /// `log` level filter for the console logger.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            socket_path: "/socket.io/".to_string(),
            toast_duration_ms: 5000,
            saved_message_ms: 1000,
            scroll_threshold_px: 1.0,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the meta tag; absent tag or empty content gives the defaults.
    pub fn from_document() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(META_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}
