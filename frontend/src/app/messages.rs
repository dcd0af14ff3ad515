use crate::channel::ChannelEvent;
use crate::dashboard::Intent;

#[derive(Debug, Clone)]
pub enum Msg {
    Intent(Intent),
    Channel(ChannelEvent),
    ReturnToTop,
}
