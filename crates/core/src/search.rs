//! Search-as-you-type helpers.
//!
//! `Debouncer` models a cancellable delayed task on an explicit clock: every
//! new input reschedules the pending invocation and cancels the previous one.
//! Callers pass `Instant`s in, which keeps the logic deterministic and lets a
//! UI loop drive it from whatever timer it already has.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the search call.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds at most one pending value and the instant it becomes due.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to fire at `now + delay`.
    ///
    /// Returns the value that was pending before, which is now cancelled.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        self.pending.replace((now + self.delay, value)).map(|(_, previous)| previous)
    }

    /// Take the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| deadline <= now);
        if due {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Number of pages needed to show `total` results, `per_page` at a time.
pub fn total_pages(total: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
