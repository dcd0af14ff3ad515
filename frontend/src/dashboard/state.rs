use common::events::OutboundEvent;

use crate::config::DashboardConfig;

use super::book_list::BookList;
use super::checklist::ChecklistPanel;
use super::effect::Effect;
use super::gate::RequestGates;
use super::overview::OverviewDialog;
use super::preferences::ThemePreference;
use super::run::RunState;
use super::settings::SettingsDialog;
use super::toast::ToastQueue;

pub const CONNECTION_LOST: &str = "Connection Lost";
pub const RELOAD_HINT: &str = "Please reload to continue.";
pub const RECONNECT_HINT: &str = "Please reconnect to continue.";

/// Transport state as seen by the UI. There is no automatic reconnect, so
/// `Lost` is terminal until the page is reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connection {
    #[default]
    Connecting,
    Connected,
    Lost,
}

/// Every piece of dashboard UI state, owned by the root component.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub(super) toast_duration_ms: u32,
    pub(super) saved_message_ms: u32,
    pub(super) connection: Connection,
    pub(super) books: BookList,
    pub(super) checklist: ChecklistPanel,
    pub(super) run: RunState,
    pub(super) gates: RequestGates,
    pub(super) toasts: ToastQueue,
    pub(super) settings: SettingsDialog,
    pub(super) overview: OverviewDialog,
    pub(super) theme: ThemePreference,
    pub(super) sidebar_open: bool,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig, theme: ThemePreference) -> Self {
        Self {
            toast_duration_ms: config.toast_duration_ms,
            saved_message_ms: config.saved_message_ms,
            connection: Connection::Connecting,
            books: BookList::default(),
            checklist: ChecklistPanel::default(),
            run: RunState::default(),
            gates: RequestGates::default(),
            toasts: ToastQueue::default(),
            settings: SettingsDialog::default(),
            overview: OverviewDialog::default(),
            theme,
            sidebar_open: false,
        }
    }

    pub fn connection(&self) -> Connection {
        self.connection
    }

    pub fn books(&self) -> &BookList {
        &self.books
    }

    pub fn checklist(&self) -> &ChecklistPanel {
        &self.checklist
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn gates(&self) -> &RequestGates {
        &self.gates
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn settings(&self) -> &SettingsDialog {
        &self.settings
    }

    pub fn overview(&self) -> &OverviewDialog {
        &self.overview
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Checklist entries and the master toggle accept input.
    pub fn checklist_enabled(&self) -> bool {
        !self.run.controls_locked()
    }

    pub fn refresh_enabled(&self) -> bool {
        !self.run.controls_locked() && !self.checklist.is_fetching()
    }

    pub fn run_button_enabled(&self) -> bool {
        self.run.in_flight().is_none()
    }

    pub fn on_connected(&mut self) {
        log::info!("realtime channel connected");
        self.connection = Connection::Connected;
    }

    pub(super) fn notify(
        &mut self,
        title: &str,
        message: &str,
        now_ms: f64,
        effects: &mut Vec<Effect>,
    ) {
        let id = self.toasts.push(title, message, now_ms);
        effects.push(Effect::ExpireToastAfter {
            id,
            delay_ms: self.toast_duration_ms,
        });
    }

    /// Outbound events are undeliverable unless connected; the user is told
    /// so instead of the event being sent.
    pub(super) fn ensure_connected(&mut self, now_ms: f64, effects: &mut Vec<Effect>) -> bool {
        if self.connection == Connection::Connected {
            return true;
        }
        self.notify(CONNECTION_LOST, RELOAD_HINT, now_ms, effects);
        false
    }

    pub(super) fn emit(event: OutboundEvent, effects: &mut Vec<Effect>) {
        log::debug!("emit {}", event.name());
        effects.push(Effect::Emit(event));
    }
}
