//! Socket.IO (protocol 5) over Engine.IO (protocol 4) text framing.
//!
//! Only the WebSocket transport is spoken, so every frame is one text
//! message: an Engine.IO packet type digit, and for `4` (message) a nested
//! Socket.IO packet type digit, optional namespace and ack id, then JSON.
//!
//! ```text
//! 0{"sid":"..","pingInterval":25000,"pingTimeout":20000}   open
//! 2 / 3                                                    ping / pong
//! 40 / 40{"sid":".."}                                      connect / ack
//! 42["refresh_book",{"Name":"Dune",..}]                    event
//! 41                                                       disconnect
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::WireError;
use crate::events::OutboundEvent;

/// Reply to a server ping.
pub const PONG: &str = "3";

/// Joins the default namespace once the Engine.IO handshake is done.
pub const CONNECT: &str = "40";

/// Engine.IO handshake carried by the open packet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
}

/// One decoded text frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Open(Handshake),
    Close,
    Ping,
    Pong,
    Noop,
    Connected { sid: Option<String> },
    Disconnected,
    ConnectError(String),
    Event { name: String, args: Vec<Value> },
    Ack,
    /// Socket.IO packet addressed to a namespace other than `/`.
    Foreign { namespace: String },
}

pub fn decode_frame(text: &str) -> Result<Frame, WireError> {
    let mut chars = text.chars();
    let packet = chars.next().ok_or(WireError::Empty)?;
    let rest = chars.as_str();
    match packet {
        '0' => Ok(Frame::Open(serde_json::from_str(rest)?)),
        '1' => Ok(Frame::Close),
        '2' => Ok(Frame::Ping),
        '3' => Ok(Frame::Pong),
        '4' => decode_socket_packet(rest),
        '6' => Ok(Frame::Noop),
        other => Err(WireError::UnknownPacket(other)),
    }
}

fn decode_socket_packet(text: &str) -> Result<Frame, WireError> {
    let mut chars = text.chars();
    let packet = chars.next().ok_or(WireError::Empty)?;
    let (namespace, body) = split_namespace(chars.as_str());
    if !namespace.is_empty() && namespace != "/" {
        return Ok(Frame::Foreign {
            namespace: namespace.to_string(),
        });
    }
    let body = strip_ack_id(body);
    match packet {
        '0' => {
            if body.trim().is_empty() {
                return Ok(Frame::Connected { sid: None });
            }
            let value: Value = serde_json::from_str(body)?;
            let sid = value.get("sid").and_then(Value::as_str).map(str::to_string);
            Ok(Frame::Connected { sid })
        }
        '1' => Ok(Frame::Disconnected),
        '2' => {
            let mut items = match serde_json::from_str::<Value>(body)? {
                Value::Array(items) => items.into_iter(),
                _ => return Err(WireError::MissingEventName),
            };
            let name = match items.next() {
                Some(Value::String(name)) => name,
                _ => return Err(WireError::MissingEventName),
            };
            Ok(Frame::Event {
                name,
                args: items.collect(),
            })
        }
        '3' => Ok(Frame::Ack),
        '4' => {
            let message = match serde_json::from_str::<Value>(body).unwrap_or(Value::Null) {
                Value::String(text) => text,
                Value::Object(map) => map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("connection refused")
                    .to_string(),
                _ => "connection refused".to_string(),
            };
            Ok(Frame::ConnectError(message))
        }
        other => Err(WireError::UnknownSocketPacket(other)),
    }
}

/// Splits `/name,rest` into its namespace and remainder. Packets for the
/// default namespace may omit it, giving an empty namespace.
fn split_namespace(text: &str) -> (&str, &str) {
    if !text.starts_with('/') {
        return ("", text);
    }
    match text.split_once(',') {
        Some((namespace, rest)) => (namespace, rest),
        None => (text, ""),
    }
}

fn strip_ack_id(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_digit())
}

/// Encodes an outbound event as a `42[...]` frame.
pub fn encode_event(event: &OutboundEvent) -> Result<String, WireError> {
    let mut items = vec![Value::String(event.name().to_string())];
    if let Some(payload) = event.payload()? {
        items.push(payload);
    }
    Ok(format!("42{}", serde_json::to_string(&Value::Array(items))?))
}

/// WebSocket endpoint for the page that served the dashboard.
///
/// `page_protocol` is `location.protocol` (`"https:"` selects `wss`).
pub fn websocket_url(page_protocol: &str, host: &str, socket_path: &str) -> String {
    let scheme = if page_protocol.starts_with("https") {
        "wss"
    } else {
        "ws"
    };
    let path = if socket_path.starts_with('/') {
        socket_path.to_string()
    } else {
        format!("/{socket_path}")
    };
    let path = if path.ends_with('/') {
        path
    } else {
        format!("{path}/")
    };
    format!("{scheme}://{host}{path}?EIO=4&transport=websocket")
}
