//! Readarr recommendation dashboard, browser side.
//!
//! `dashboard` holds every piece of UI state and the reconciliation rules
//! against server pushes, without touching the DOM. `channel` speaks to the
//! server, `app` and `components` render the state with Yew and execute the
//! effects the dashboard asks for.

pub mod app;
pub mod channel;
mod components;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod storage;
