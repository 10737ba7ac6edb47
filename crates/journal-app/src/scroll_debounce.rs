//! Quiescence debouncer for "near end of list" signals.
//!
//! Every signal pushes the deadline out by the window; the next-page load
//! fires once on the first tick after the signals stop.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ScrollDebouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl ScrollDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a scroll signal at `now`
    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the window has elapsed since the
    /// last signal.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
