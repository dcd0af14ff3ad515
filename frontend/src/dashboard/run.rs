/// A start or stop that was sent but not yet confirmed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRequest {
    Start,
    Stop,
}

/// What a sidebar update did to an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The confirmed flag was taken from the update.
    Settled,
    /// The update predates the request; ask the server again.
    Stale,
}

/// Whether a recommendation run is active, as last confirmed by the server.
///
/// The confirmed flag only changes on a sidebar update. While a request is
/// in flight the run controls stay locked as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    running: bool,
    in_flight: Option<RunRequest>,
    /// A stale reply was already answered with another status request.
    requeried: bool,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn in_flight(&self) -> Option<RunRequest> {
        self.in_flight
    }

    /// Checklist, master toggle and list refresh are disabled while true.
    pub fn controls_locked(&self) -> bool {
        self.running || self.in_flight.is_some()
    }

    /// What the start/stop button would send, if it can send anything.
    pub fn next_request(&self) -> Option<RunRequest> {
        match (self.in_flight, self.running) {
            (Some(_), _) => None,
            (None, true) => Some(RunRequest::Stop),
            (None, false) => Some(RunRequest::Start),
        }
    }

    pub fn request(&mut self, request: RunRequest) {
        self.in_flight = Some(request);
        self.requeried = false;
    }

    /// Applies the `Status`/`Running` pair of a sidebar update.
    ///
    /// A start settles on an error or on `running`, a stop on `!running`. A
    /// successful update that contradicts the request was produced before
    /// the server acted on it and is answered with one more status request;
    /// a second contradicting update is taken as the server's answer.
    pub fn confirm(&mut self, success: bool, running: bool) -> Confirmation {
        let consistent = match self.in_flight {
            None => true,
            Some(RunRequest::Start) => !success || running,
            Some(RunRequest::Stop) => !running,
        };
        if !consistent && !self.requeried {
            self.requeried = true;
            return Confirmation::Stale;
        }
        self.running = running;
        self.in_flight = None;
        self.requeried = false;
        Confirmation::Settled
    }

    pub fn button_label(&self) -> &'static str {
        match (self.in_flight, self.running) {
            (Some(RunRequest::Start), _) => "Starting...",
            (Some(RunRequest::Stop), _) => "Stopping...",
            (None, true) => "Stop",
            (None, false) => "Start",
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.running {
            "btn-warning"
        } else {
            "btn-success"
        }
    }
}
