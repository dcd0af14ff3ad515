use thiserror::Error;

/// Failure while turning a raw text frame into a typed event.
///
/// None of these are fatal for the client: the offending frame is logged and
/// dropped, and processing continues with the next one.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("empty frame")]
    Empty,

    #[error("unknown engine.io packet type `{0}`")]
    UnknownPacket(char),

    #[error("unknown socket.io packet type `{0}`")]
    UnknownSocketPacket(char),

    #[error("event frame carries no event name")]
    MissingEventName,

    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    #[error("event `{0}` arrived without its payload")]
    MissingPayload(String),

    #[error("invalid payload for `{event}`: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
