use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::loose_string;

/// A recommended book as pushed by the server.
///
/// Field names follow the server's JSON keys. `votes` and `rating` are
/// preformatted display strings (`"Votes: 12k"`), not numbers. The whole item
/// is sent back unchanged with `adder` and `overview_req`, so the shape must
/// survive a round trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookItem {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Author", default)]
    pub author: String,
    #[serde(rename = "Overview", default, deserialize_with = "loose_string")]
    pub overview: String,
    /// Cover image URL. Empty strings from the server are treated as absent.
    #[serde(rename = "Image_Link", default, deserialize_with = "non_empty")]
    pub image_link: Option<String>,
    #[serde(rename = "Votes", default, deserialize_with = "loose_string")]
    pub votes: String,
    #[serde(rename = "Rating", default, deserialize_with = "loose_string")]
    pub rating: String,
    #[serde(rename = "Published_Date", default, deserialize_with = "loose_string")]
    pub published_date: String,
    #[serde(rename = "Page_Count", default, deserialize_with = "loose_string")]
    pub page_count: String,
    /// The library book this recommendation was derived from.
    #[serde(rename = "Base_Book", default, deserialize_with = "loose_string")]
    pub base_book: String,
    #[serde(rename = "Status", default)]
    pub status: BookStatus,
}

/// Outcome of an add request as reported by the server.
///
/// The set is closed on the server side; anything unrecognised is kept
/// verbatim in `Other` and presented like `Pending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookStatus {
    #[default]
    Pending,
    Added,
    AlreadyInReadarr,
    FailedToAdd,
    InvalidPath,
    InvalidBookId,
    Other(String),
}

/// Presentation family of a status. Success and failure never share a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Failure,
    Pending,
}

impl BookStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookStatus::Pending => "",
            BookStatus::Added => "Added",
            BookStatus::AlreadyInReadarr => "Already in Readarr",
            BookStatus::FailedToAdd => "Failed to Add",
            BookStatus::InvalidPath => "Invalid Path",
            BookStatus::InvalidBookId => "Invalid Book ID",
            BookStatus::Other(text) => text,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            BookStatus::Added | BookStatus::AlreadyInReadarr => StatusTone::Success,
            BookStatus::FailedToAdd | BookStatus::InvalidPath | BookStatus::InvalidBookId => {
                StatusTone::Failure
            }
            BookStatus::Pending | BookStatus::Other(_) => StatusTone::Pending,
        }
    }
}

impl From<&str> for BookStatus {
    fn from(value: &str) -> Self {
        match value.trim() {
            "" => BookStatus::Pending,
            "Added" => BookStatus::Added,
            "Already in Readarr" => BookStatus::AlreadyInReadarr,
            "Failed to Add" => BookStatus::FailedToAdd,
            "Invalid Path" => BookStatus::InvalidPath,
            "Invalid Book ID" => BookStatus::InvalidBookId,
            other => BookStatus::Other(other.to_string()),
        }
    }
}

impl Serialize for BookStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = loose_string(deserializer)?;
        Ok(BookStatus::from(text.as_str()))
    }
}

impl StatusTone {
    /// Class applied to the card body.
    pub fn body_class(self) -> &'static str {
        match self {
            StatusTone::Success => "status-green",
            StatusTone::Failure => "status-red",
            StatusTone::Pending => "status-blue",
        }
    }

    /// Class applied to the card's add button.
    pub fn button_class(self) -> &'static str {
        match self {
            StatusTone::Success => "btn-secondary",
            StatusTone::Failure => "btn-danger",
            StatusTone::Pending => "btn-primary",
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = loose_string(deserializer)?;
    Ok(if text.trim().is_empty() { None } else { Some(text) })
}
