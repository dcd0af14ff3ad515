use common::events::OutboundEvent;
use uuid::Uuid;

use super::gate::RequestKind;
use super::preferences::ThemePreference;

/// Work the host performs on behalf of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send one event over the channel.
    Emit(OutboundEvent),
    /// After `delay_ms`, deliver `Intent::ReleaseGate { kind, until_ms }`.
    ReleaseGateAfter {
        kind: RequestKind,
        until_ms: f64,
        delay_ms: u32,
    },
    /// After `delay_ms`, deliver `Intent::ExpireToast(id)`.
    ExpireToastAfter { id: Uuid, delay_ms: u32 },
    /// After `delay_ms`, deliver `Intent::HideSavedMessage(generation)`.
    HideSavedAfter { generation: u64, delay_ms: u32 },
    /// Set `data-bs-theme` and persist both theme keys.
    ApplyTheme(ThemePreference),
    /// Freeze page scrolling while a modal is shown.
    LockScroll,
    UnlockScroll,
}
