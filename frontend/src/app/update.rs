//! Update function for the root component.
//!
//! Every message is forwarded to the headless dashboard with the current
//! wall-clock time; the returned effects are carried out here.

use gloo_timers::future::TimeoutFuture;
use js_sys::Date;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::channel::ChannelEvent;
use crate::dashboard::{Effect, Intent};

use super::dom;
use super::messages::Msg;
use super::state::DashboardApp;

pub fn update(app: &mut DashboardApp, ctx: &Context<DashboardApp>, msg: Msg) -> bool {
    let now_ms = Date::now();
    let effects = match msg {
        // scroll listeners fire continuously; only a granted request re-renders
        Msg::Intent(Intent::LoadMore) => {
            let effects = app.dashboard.handle(Intent::LoadMore, now_ms);
            let changed = !effects.is_empty();
            run_effects(app, ctx.link(), effects);
            return changed;
        }
        Msg::Intent(intent) => app.dashboard.handle(intent, now_ms),
        Msg::Channel(ChannelEvent::Connected) => {
            app.dashboard.on_connected();
            Vec::new()
        }
        Msg::Channel(ChannelEvent::Inbound(event)) => app.dashboard.apply(event, now_ms),
        Msg::ReturnToTop => {
            dom::scroll_to_top();
            return false;
        }
    };
    run_effects(app, ctx.link(), effects);
    true
}

fn run_effects(app: &mut DashboardApp, link: &Scope<DashboardApp>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Emit(event) => match &app.channel {
                Some(channel) => {
                    if let Err(err) = channel.emit(&event) {
                        log::warn!("could not emit {}: {err}", event.name());
                    }
                }
                None => log::warn!("no channel, {} dropped", event.name()),
            },
            Effect::ReleaseGateAfter {
                kind,
                until_ms,
                delay_ms,
            } => schedule(link, delay_ms, Intent::ReleaseGate { kind, until_ms }),
            Effect::ExpireToastAfter { id, delay_ms } => {
                schedule(link, delay_ms, Intent::ExpireToast(id));
            }
            Effect::HideSavedAfter {
                generation,
                delay_ms,
            } => schedule(link, delay_ms, Intent::HideSavedMessage(generation)),
            Effect::ApplyTheme(preference) => {
                dom::apply_theme(preference.theme);
                if let Err(err) = preference.save(&app.store) {
                    log::warn!("theme preference not saved: {err}");
                }
            }
            Effect::LockScroll => dom::lock_scroll(),
            Effect::UnlockScroll => dom::unlock_scroll(),
        }
    }
}

/// Feeds `intent` back into the component after `delay_ms`.
fn schedule(link: &Scope<DashboardApp>, delay_ms: u32, intent: Intent) {
    let link = link.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        link.send_message(Msg::Intent(intent));
    });
}
