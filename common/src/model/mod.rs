pub mod book;
pub mod checklist;
pub mod settings;
pub mod toast;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, a number, or null/absent and yields display text.
///
/// The server fills some book fields from Google Books, which reports page
/// counts as integers and may omit dates entirely.
pub(crate) fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}
