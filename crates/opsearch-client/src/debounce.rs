// crates/opsearch-client/src/debounce.rs

//! Trailing-edge value debounce.

use std::time::Duration;

use tokio::time::Instant;

/// Holds at most one pending value together with its commit deadline.
///
/// Every [`submit`] supersedes the pending value and restarts the delay, so
/// only the last value of a burst ever commits. The holder does not sleep
/// itself: the owning loop awaits [`deadline`] via `sleep_until` and calls
/// [`take`] once it fires. Dropping the owner drops the armed deadline with
/// it, which is the scoped-cancellation guarantee.
///
/// [`submit`]: Debouncer::submit
/// [`deadline`]: Debouncer::deadline
/// [`take`]: Debouncer::take
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the delay from now.
    pub fn submit(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    /// Deadline of the pending commit, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Takes the pending value, disarming the debounce.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
