//! Headless dashboard state.
//!
//! `Dashboard` owns every piece of UI state. Inbound server events go through
//! [`Dashboard::apply`], user input and timer callbacks through
//! [`Dashboard::handle`]; both mutate the state in place and return the
//! [`Effect`]s the host must carry out (emits, timers, DOM side effects).

pub mod book_list;
pub mod checklist;
mod effect;
pub mod gate;
mod intent;
pub mod overview;
pub mod preferences;
pub mod run;
pub mod settings;
mod state;
pub mod toast;
mod update;

pub use effect::Effect;
pub use intent::Intent;
pub use state::{Connection, Dashboard, CONNECTION_LOST, RECONNECT_HINT, RELOAD_HINT};
