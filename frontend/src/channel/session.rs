//! Socket.IO session state machine, independent of any socket.
//!
//! Feed it every received text frame; it answers with frames to send back and
//! events to hand to the dashboard.

use common::error::WireError;
use common::events::{InboundEvent, OutboundEvent};
use common::wire::{self, Frame};

use super::ChannelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the Engine.IO open packet.
    #[default]
    Opening,
    /// Namespace connect sent, waiting for the ack.
    Connecting,
    Connected,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutput {
    Send(String),
    Connected,
    Deliver(InboundEvent),
    Closed(String),
}

#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn on_text(&mut self, text: &str) -> Vec<SessionOutput> {
        if self.phase == Phase::Closed {
            return Vec::new();
        }
        let frame = match wire::decode_frame(text) {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("dropping frame: {err}");
                return Vec::new();
            }
        };

        match frame {
            Frame::Open(handshake) => {
                log::info!(
                    "engine.io session {} (ping every {} ms)",
                    handshake.sid,
                    handshake.ping_interval
                );
                self.phase = Phase::Connecting;
                vec![SessionOutput::Send(wire::CONNECT.to_string())]
            }
            Frame::Ping => vec![SessionOutput::Send(wire::PONG.to_string())],
            Frame::Connected { sid } => {
                log::debug!("socket.io namespace joined ({})", sid.unwrap_or_default());
                self.phase = Phase::Connected;
                vec![SessionOutput::Connected]
            }
            Frame::Event { name, args } => match InboundEvent::decode(&name, args) {
                Ok(event) => vec![SessionOutput::Deliver(event)],
                Err(WireError::UnknownEvent(name)) => {
                    log::debug!("ignoring unknown event `{name}`");
                    Vec::new()
                }
                Err(err) => {
                    log::warn!("dropping event: {err}");
                    Vec::new()
                }
            },
            Frame::Close | Frame::Disconnected => self.close("server closed the session"),
            Frame::ConnectError(message) => {
                log::error!("socket.io connect refused: {message}");
                self.close(&message)
            }
            Frame::Foreign { namespace } => {
                log::debug!("ignoring packet for namespace `{namespace}`");
                Vec::new()
            }
            Frame::Pong | Frame::Noop | Frame::Ack => Vec::new(),
        }
    }

    pub fn on_transport_closed(&mut self, reason: &str) -> Vec<SessionOutput> {
        if self.phase == Phase::Closed {
            return Vec::new();
        }
        self.close(reason)
    }

    /// Frames an outbound event. Only a joined session accepts emits.
    pub fn encode(&self, event: &OutboundEvent) -> Result<String, ChannelError> {
        if self.phase != Phase::Connected {
            return Err(ChannelError::NotConnected);
        }
        Ok(wire::encode_event(event)?)
    }

    fn close(&mut self, reason: &str) -> Vec<SessionOutput> {
        self.phase = Phase::Closed;
        vec![SessionOutput::Closed(reason.to_string())]
    }
}
