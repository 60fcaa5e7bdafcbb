/// Coalesces redraw requests so at most one deferred redraw is outstanding.
///
/// The deferred redraw reads the viewer state when it runs, so a burst of moves collapses into
/// one draw of the most recent frame index.
#[derive(Clone, Debug, Default)]
pub struct RedrawThrottle {
    pending: bool,
    requested: u64,
    drawn: u64,
}

impl RedrawThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request. Returns `true` when the caller must schedule a deferred redraw, `false`
    /// when one is already queued and will pick up this change.
    pub fn request(&mut self) -> bool {
        self.requested += 1;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called when the deferred redraw runs. Returns `false` if nothing was pending.
    pub fn fire(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.drawn += 1;
        true
    }

    /// Forgets a queued redraw without drawing, e.g. when the viewer is disposed.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of requests absorbed into an earlier pending redraw.
    pub fn coalesced(&self) -> u64 {
        self.requested - self.drawn - u64::from(self.pending)
    }
}
