//! Single-slot request gates with a fixed cooldown.
//!
//! A gate is `Idle` or `Pending` until a deadline. Granting moves it to
//! `Pending`; the caller sends its request and schedules a release for the
//! same deadline. Attempts while pending are dropped, not queued. A gate
//! whose deadline has passed is idle even if its release never ran, so a lost
//! timer cannot lock a kind out.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    LoadMore,
    Overview,
}

impl RequestKind {
    pub const fn cooldown_ms(self) -> u32 {
        match self {
            RequestKind::LoadMore => 1000,
            RequestKind::Overview => 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GateState {
    #[default]
    Idle,
    Pending { until_ms: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestGate {
    kind: RequestKind,
    state: GateState,
}

impl RequestGate {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            state: GateState::Idle,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_idle(&self, now_ms: f64) -> bool {
        match self.state {
            GateState::Idle => true,
            GateState::Pending { until_ms } => now_ms >= until_ms,
        }
    }

    /// Returns the deadline of the new window, or `None` when denied.
    pub fn try_acquire(&mut self, now_ms: f64) -> Option<f64> {
        if !self.is_idle(now_ms) {
            return None;
        }
        let until_ms = now_ms + f64::from(self.kind.cooldown_ms());
        self.state = GateState::Pending { until_ms };
        Some(until_ms)
    }

    /// Ends the window that `until_ms` identifies. A release belonging to an
    /// older window is ignored.
    pub fn release(&mut self, until_ms: f64) -> bool {
        match self.state {
            GateState::Pending { until_ms: current } if current == until_ms => {
                self.state = GateState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestGates {
    load_more: RequestGate,
    overview: RequestGate,
}

impl Default for RequestGates {
    fn default() -> Self {
        Self {
            load_more: RequestGate::new(RequestKind::LoadMore),
            overview: RequestGate::new(RequestKind::Overview),
        }
    }
}

impl RequestGates {
    pub fn get(&self, kind: RequestKind) -> &RequestGate {
        match kind {
            RequestKind::LoadMore => &self.load_more,
            RequestKind::Overview => &self.overview,
        }
    }

    pub fn get_mut(&mut self, kind: RequestKind) -> &mut RequestGate {
        match kind {
            RequestKind::LoadMore => &mut self.load_more,
            RequestKind::Overview => &mut self.overview,
        }
    }

    pub fn try_acquire(&mut self, kind: RequestKind, now_ms: f64) -> Option<f64> {
        self.get_mut(kind).try_acquire(now_ms)
    }

    pub fn release(&mut self, kind: RequestKind, until_ms: f64) -> bool {
        self.get_mut(kind).release(until_ms)
    }
}
