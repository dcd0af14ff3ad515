//! Reconciliation rules.
//!
//! Contract
//! - Inbound events are applied strictly in arrival order and are idempotent
//!   per book identity.
//! - Controls gated by the run follow the server-confirmed `Running` flag.
//! - Every outbound event is fire-and-forget; its effect, if any, shows up
//!   later as an independent inbound event.

use common::events::{InboundEvent, OutboundEvent};

use super::effect::Effect;
use super::gate::RequestKind;
use super::intent::Intent;
use super::run::{Confirmation, RunRequest};
use super::state::{Connection, Dashboard, CONNECTION_LOST, RECONNECT_HINT};

impl Dashboard {
    /// Applies one server push.
    pub fn apply(&mut self, event: InboundEvent, now_ms: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            InboundEvent::SidebarUpdate(update) => {
                self.checklist.apply_update(&update);
                if self.run.confirm(update.is_success(), update.running) == Confirmation::Stale {
                    log::debug!("sidebar update predates the run request, asking again");
                    Self::emit(OutboundEvent::SidebarOpened, &mut effects);
                }
            }
            InboundEvent::BookStatus(book) => {
                if self.books.apply_status(&book) == 0 {
                    log::debug!("status for `{}` matches no card", book.name);
                }
            }
            InboundEvent::MoreBooks(books) => {
                let appended = self.books.append(books);
                log::debug!("{appended} new book cards");
            }
            InboundEvent::ClearList => self.books.clear(),
            InboundEvent::SettingsLoaded(settings) => {
                if !self.settings.deliver(settings) {
                    log::debug!("settings_loaded with no open dialog, ignored");
                }
            }
            InboundEvent::Toast(toast) => {
                self.notify(&toast.title, &toast.message, now_ms, &mut effects);
            }
            InboundEvent::OverviewReady(book) => {
                if self.overview.show(book) {
                    effects.push(Effect::LockScroll);
                }
            }
            InboundEvent::Disconnected => {
                if self.connection != Connection::Lost {
                    log::warn!("realtime channel lost");
                    self.connection = Connection::Lost;
                    self.toasts.push_sticky(CONNECTION_LOST, RECONNECT_HINT, now_ms);
                }
            }
        }
        effects
    }

    /// Applies one user action or timer callback.
    pub fn handle(&mut self, intent: Intent, now_ms: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        match intent {
            Intent::RequestBookList => {
                if self.refresh_enabled() && self.ensure_connected(now_ms, &mut effects) {
                    self.checklist.begin_fetch();
                    Self::emit(OutboundEvent::RequestBookList, &mut effects);
                }
            }
            Intent::AddBook(index) => {
                let enabled = self.books.card(index).is_some_and(|card| card.action_enabled());
                if enabled && self.ensure_connected(now_ms, &mut effects) {
                    if let Some(book) = self.books.begin_add(index) {
                        Self::emit(OutboundEvent::AddBook(book), &mut effects);
                    }
                }
            }
            Intent::RequestOverview(index) => {
                let book = match self.books.card(index) {
                    Some(card) if card.overview_enabled() => card.book().clone(),
                    _ => return effects,
                };
                if !self.ensure_connected(now_ms, &mut effects) {
                    return effects;
                }
                match self.gates.try_acquire(RequestKind::Overview, now_ms) {
                    Some(until_ms) => {
                        self.books.mark_overview_busy(index);
                        Self::emit(OutboundEvent::FetchOverview(book), &mut effects);
                        effects.push(release_after(RequestKind::Overview, until_ms));
                    }
                    None => log::debug!("overview request dropped, cooldown active"),
                }
            }
            Intent::LoadMore => {
                // scroll events fire constantly; no toast while offline
                if self.connection != Connection::Connected {
                    return effects;
                }
                match self.gates.try_acquire(RequestKind::LoadMore, now_ms) {
                    Some(until_ms) => {
                        Self::emit(OutboundEvent::LoadMoreBooks, &mut effects);
                        effects.push(release_after(RequestKind::LoadMore, until_ms));
                    }
                    None => log::trace!("load more dropped, cooldown active"),
                }
            }
            Intent::ToggleRun => {
                let Some(request) = self.run.next_request() else {
                    return effects;
                };
                if !self.ensure_connected(now_ms, &mut effects) {
                    return effects;
                }
                let event = match request {
                    RunRequest::Start => OutboundEvent::StartRun(self.checklist.selected_names()),
                    RunRequest::Stop => OutboundEvent::StopRun,
                };
                self.run.request(request);
                Self::emit(event, &mut effects);
                // the reply carries the confirmed `Running` flag
                Self::emit(OutboundEvent::SidebarOpened, &mut effects);
            }
            Intent::ToggleEntry { index, checked } => {
                if self.checklist_enabled() {
                    self.checklist.toggle(index, checked);
                }
            }
            Intent::SetAllEntries(checked) => {
                if self.checklist_enabled() {
                    self.checklist.set_all(checked);
                }
            }
            Intent::OpenSidebar => {
                self.sidebar_open = true;
                if self.ensure_connected(now_ms, &mut effects) {
                    Self::emit(OutboundEvent::SidebarOpened, &mut effects);
                }
            }
            Intent::CloseSidebar => self.sidebar_open = false,
            Intent::OpenSettings => {
                let connected = self.ensure_connected(now_ms, &mut effects);
                self.settings.open(connected);
                if connected {
                    Self::emit(OutboundEvent::LoadSettings, &mut effects);
                }
            }
            Intent::CloseSettings => self.settings.close(),
            Intent::EditSettings(field, value) => self.settings.edit(field, value),
            Intent::SaveSettings => {
                if self.ensure_connected(now_ms, &mut effects) {
                    Self::emit(
                        OutboundEvent::SaveSettings(self.settings.form().clone()),
                        &mut effects,
                    );
                    let generation = self.settings.show_saved();
                    effects.push(Effect::HideSavedAfter {
                        generation,
                        delay_ms: self.saved_message_ms,
                    });
                }
            }
            Intent::CloseOverview => {
                if self.overview.close() {
                    effects.push(Effect::UnlockScroll);
                }
            }
            Intent::DismissToast(id) | Intent::ExpireToast(id) => {
                self.toasts.dismiss(id);
            }
            Intent::ToggleTheme => {
                self.theme = self.theme.toggled();
                effects.push(Effect::ApplyTheme(self.theme));
            }
            Intent::ReleaseGate { kind, until_ms } => {
                if self.gates.release(kind, until_ms) && kind == RequestKind::Overview {
                    self.books.release_overview_buttons();
                }
            }
            Intent::HideSavedMessage(generation) => self.settings.hide_saved(generation),
        }
        effects
    }
}

fn release_after(kind: RequestKind, until_ms: f64) -> Effect {
    Effect::ReleaseGateAfter {
        kind,
        until_ms,
        delay_ms: kind.cooldown_ms(),
    }
}
