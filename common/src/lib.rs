//! Wire contract shared with the recommendation server.
//!
//! - `model`: the payload shapes (books, checklist entries, settings, toasts).
//! - `events`: the closed set of event names the client sends and receives.
//! - `wire`: Socket.IO over Engine.IO v4 text framing for those events.
//! - `error`: decode failures.

pub mod error;
pub mod events;
pub mod model;
pub mod wire;
