//! Root component state.
//!
//! The headless [`Dashboard`] holds everything the view renders; the
//! component adds the browser resources it needs to carry out effects.

use crate::channel::Channel;
use crate::dashboard::Dashboard;
use crate::storage::LocalStorage;

use super::listeners::WindowListener;

pub struct DashboardApp {
    pub dashboard: Dashboard,
    /// `None` when the socket could not be opened at all.
    pub channel: Option<Channel>,
    pub store: LocalStorage,
    /// Kept alive for the component's lifetime; dropping detaches them.
    pub listeners: Vec<WindowListener>,
}
