//! Realtime channel to the recommendation server.
//!
//! A single WebSocket carries Socket.IO frames both ways. Received frames run
//! through [`Session`] and come out as [`ChannelEvent`]s on the supplied
//! callback, in arrival order. Emits are queued to a writer task; none of them
//! waits for or expects a reply.

mod session;

use std::cell::RefCell;
use std::rc::Rc;

use common::error::WireError;
use common::events::{InboundEvent, OutboundEvent};
use futures_channel::mpsc::{self, UnboundedSender};
use futures_util::{SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

pub use session::{Phase, Session, SessionOutput};

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("could not open websocket: {0}")]
    Open(String),
    #[error("channel is not connected")]
    NotConnected,
    #[error("channel writer has stopped")]
    Closed,
    #[error("failed to encode event: {0}")]
    Encode(#[from] WireError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    Connected,
    Inbound(InboundEvent),
}

pub struct Channel {
    outbound: UnboundedSender<String>,
    session: Rc<RefCell<Session>>,
}

impl Channel {
    pub fn connect(url: &str, on_event: Callback<ChannelEvent>) -> Result<Self, ChannelError> {
        let socket = WebSocket::open(url).map_err(|err| ChannelError::Open(err.to_string()))?;
        log::info!("opening realtime channel {url}");

        let (mut sink, mut stream) = socket.split();
        let (outbound, mut queued) = mpsc::unbounded::<String>();
        let session = Rc::new(RefCell::new(Session::new()));

        spawn_local(async move {
            while let Some(text) = queued.next().await {
                if let Err(err) = sink.send(Message::Text(text)).await {
                    log::warn!("websocket send failed: {err}");
                    break;
                }
            }
        });

        let reader_session = Rc::clone(&session);
        let replies = outbound.clone();
        spawn_local(async move {
            while let Some(message) = stream.next().await {
                match message {
                    Ok(Message::Text(text)) => {
                        // borrow ends before dispatch: handlers may emit
                        let outputs = reader_session.borrow_mut().on_text(&text);
                        if dispatch(outputs, &replies, &on_event) {
                            return;
                        }
                    }
                    Ok(Message::Bytes(bytes)) => {
                        log::debug!("ignoring {} byte binary frame", bytes.len());
                    }
                    Err(err) => {
                        log::warn!("websocket receive failed: {err}");
                        break;
                    }
                }
            }
            let outputs = reader_session.borrow_mut().on_transport_closed("socket closed");
            dispatch(outputs, &replies, &on_event);
        });

        Ok(Self { outbound, session })
    }

    pub fn emit(&self, event: &OutboundEvent) -> Result<(), ChannelError> {
        let frame = self.session.borrow().encode(event)?;
        self.outbound
            .unbounded_send(frame)
            .map_err(|_| ChannelError::Closed)
    }
}

/// Returns true once the session has closed.
fn dispatch(
    outputs: Vec<SessionOutput>,
    replies: &UnboundedSender<String>,
    on_event: &Callback<ChannelEvent>,
) -> bool {
    let mut closed = false;
    for output in outputs {
        match output {
            SessionOutput::Send(text) => {
                if replies.unbounded_send(text).is_err() {
                    log::warn!("channel writer gone, reply dropped");
                }
            }
            SessionOutput::Connected => on_event.emit(ChannelEvent::Connected),
            SessionOutput::Deliver(event) => on_event.emit(ChannelEvent::Inbound(event)),
            SessionOutput::Closed(reason) => {
                log::warn!("realtime channel closed: {reason}");
                replies.close_channel();
                on_event.emit(ChannelEvent::Inbound(InboundEvent::Disconnected));
                closed = true;
            }
        }
    }
    closed
}
