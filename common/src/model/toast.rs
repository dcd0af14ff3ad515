use serde::{Deserialize, Serialize};

/// Payload of `new_toast_msg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}
