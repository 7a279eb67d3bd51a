use crate::graph::GraphDocument;
use std::time::{Duration, Instant};

/// Default quiet period between the last graph change and the draft
/// capture.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_secs(1);

/// Trailing-debounce scheduler for local draft captures.
///
/// The scheduler owns no timer and spawns nothing; the host passes its
/// clock in (`Instant::now()` in production, fixed instants in tests) and
/// polls. Every change re-arms the window and replaces the pending
/// capture, so only the latest state of a quiet window gets stored.
///
/// A fresh scheduler starts suppressed: until the host reports that the
/// startup check for an existing draft has resolved, changes are dropped
/// so an unconfirmed draft is never overwritten.
#[derive(Debug, Clone)]
pub struct DraftScheduler {
    window: Duration,
    released: bool,
    pending: Option<(Instant, GraphDocument)>,
}

impl DraftScheduler {
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            released: false,
            pending: None,
        }
    }

    /// Lifts the startup suppression once the draft-conflict check has
    /// resolved.
    pub fn release(&mut self) {
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Records a change at `now`, re-arming the window and replacing any
    /// pending capture. Ignored while suppressed.
    pub fn graph_changed(&mut self, document: GraphDocument, now: Instant) {
        if !self.released {
            return;
        }
        self.pending = Some((now + self.window, document));
    }

    /// Hands out the pending capture once the window has elapsed with no
    /// further change.
    pub fn poll(&mut self, now: Instant) -> Option<GraphDocument> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {
                self.pending.take().map(|(_, document)| document)
            }
            _ => None,
        }
    }

    /// Drops any pending capture (host unmount).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for DraftScheduler {
    fn default() -> Self {
        Self::new()
    }
}
