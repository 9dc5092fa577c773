//! Single-slot deferred focus scheduling
//!
//! Focus requests are not pushed to the sink immediately: the host list
//! needs one layout pass to materialize a structural change before the
//! caret can land. The scheduler holds at most one pending request with a
//! due time; scheduling a new request replaces the pending one, so only
//! the most recent request is ever delivered.
//!
//! Time is logical, advanced explicitly through [`FocusScheduler::tick`].
//! No timers, no threads; the host drives the clock.

use crate::focus::FocusRequest;

/// Holds at most one pending focus request with a due time
#[derive(Debug, Default)]
pub struct FocusScheduler {
    pending: Option<PendingFocus>,
    now_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct PendingFocus {
    request: FocusRequest,
    due_at_ms: u64,
}

impl FocusScheduler {
    /// Creates a scheduler with no pending request at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `request` to be delivered after `delay_ms`
    ///
    /// Any still-pending request is superseded.
    pub fn schedule(&mut self, request: FocusRequest, delay_ms: u64) {
        self.pending = Some(PendingFocus {
            request,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
        });
    }

    /// Drops the pending request, if any; returns whether one existed
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns true if a request is waiting for its due time
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Current logical time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advances logical time and returns the pending request if it is due
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<FocusRequest> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        match self.pending {
            Some(pending) if pending.due_at_ms <= self.now_ms => {
                self.pending = None;
                Some(pending.request)
            }
            _ => None,
        }
    }
}
