use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One library book offered as a seed for a recommendation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistEntry {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            checked,
        }
    }
}

/// Payload of `readarr_sidebar_update`.
///
/// On success `Data` holds the checklist; on failure it may hold either the
/// previous checklist or an error string, and `Code` carries an HTTP status or
/// a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SidebarUpdate {
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Code", default)]
    pub code: Option<Value>,
    #[serde(rename = "Data", default)]
    pub data: Option<SidebarData>,
    #[serde(rename = "Running", default)]
    pub running: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SidebarData {
    Entries(Vec<ChecklistEntry>),
    Message(String),
    Other(Value),
}

/// What a sidebar update means for the checklist panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarOutcome {
    Retrieved(Vec<ChecklistEntry>),
    Failed { code: String },
}

impl SidebarUpdate {
    pub fn is_success(&self) -> bool {
        self.status == "Success"
    }

    pub fn outcome(&self) -> SidebarOutcome {
        match (&self.data, self.is_success()) {
            (Some(SidebarData::Entries(entries)), true) => {
                SidebarOutcome::Retrieved(entries.clone())
            }
            _ => SidebarOutcome::Failed {
                code: self.failure_text(),
            },
        }
    }

    fn failure_text(&self) -> String {
        let code = match &self.code {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        };
        if !code.is_empty() {
            return code;
        }
        match &self.data {
            Some(SidebarData::Message(message)) if !message.is_empty() => message.clone(),
            _ if self.is_success() => "Unexpected book list".to_string(),
            _ => "Error".to_string(),
        }
    }
}
