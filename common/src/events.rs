//! Closed event vocabulary between the dashboard and the server.
//!
//! Every event is fire-and-forget. Nothing here correlates a request with a
//! response: effects of an outbound event come back, if at all, as later
//! inbound events matched by book name or as broadcasts.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::WireError;
use crate::model::book::BookItem;
use crate::model::checklist::SidebarUpdate;
use crate::model::settings::Settings;
use crate::model::toast::ToastMessage;

/// Client → server.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    RequestBookList,
    AddBook(BookItem),
    StartRun(Vec<String>),
    StopRun,
    SaveSettings(Settings),
    LoadSettings,
    SidebarOpened,
    LoadMoreBooks,
    FetchOverview(BookItem),
}

impl OutboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OutboundEvent::RequestBookList => "get_readarr_books",
            OutboundEvent::AddBook(_) => "adder",
            OutboundEvent::StartRun(_) => "start_req",
            OutboundEvent::StopRun => "stop_req",
            OutboundEvent::SaveSettings(_) => "update_settings",
            OutboundEvent::LoadSettings => "load_settings",
            OutboundEvent::SidebarOpened => "side_bar_opened",
            OutboundEvent::LoadMoreBooks => "load_more_books",
            OutboundEvent::FetchOverview(_) => "overview_req",
        }
    }

    /// The single argument sent after the event name, if the event has one.
    pub fn payload(&self) -> Result<Option<Value>, WireError> {
        let value = match self {
            OutboundEvent::AddBook(book) | OutboundEvent::FetchOverview(book) => {
                serde_json::to_value(book)?
            }
            OutboundEvent::StartRun(names) => serde_json::to_value(names)?,
            OutboundEvent::SaveSettings(settings) => serde_json::to_value(settings)?,
            OutboundEvent::RequestBookList
            | OutboundEvent::StopRun
            | OutboundEvent::LoadSettings
            | OutboundEvent::SidebarOpened
            | OutboundEvent::LoadMoreBooks => return Ok(None),
        };
        Ok(Some(value))
    }
}

/// Server → client.
///
/// `Disconnected` never arrives as a named event; the channel produces it
/// when the transport or the Socket.IO session goes away.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    SidebarUpdate(SidebarUpdate),
    BookStatus(BookItem),
    MoreBooks(Vec<BookItem>),
    ClearList,
    SettingsLoaded(Settings),
    Toast(ToastMessage),
    OverviewReady(BookItem),
    Disconnected,
}

impl InboundEvent {
    /// Builds the typed event from a Socket.IO event name and its arguments.
    pub fn decode(name: &str, args: Vec<Value>) -> Result<Self, WireError> {
        let mut args = args.into_iter();
        let event = match name {
            "readarr_sidebar_update" => InboundEvent::SidebarUpdate(payload(name, args.next())?),
            "refresh_book" => InboundEvent::BookStatus(payload(name, args.next())?),
            "more_books_loaded" => InboundEvent::MoreBooks(payload(name, args.next())?),
            "clear" => InboundEvent::ClearList,
            "settings_loaded" => InboundEvent::SettingsLoaded(payload(name, args.next())?),
            "new_toast_msg" => InboundEvent::Toast(payload(name, args.next())?),
            "overview" => InboundEvent::OverviewReady(payload(name, args.next())?),
            other => return Err(WireError::UnknownEvent(other.to_string())),
        };
        Ok(event)
    }
}

fn payload<T: DeserializeOwned>(event: &str, value: Option<Value>) -> Result<T, WireError> {
    let value = value.ok_or_else(|| WireError::MissingPayload(event.to_string()))?;
    serde_json::from_value(value).map_err(|source| WireError::Payload {
        event: event.to_string(),
        source,
    })
}
