use std::time::{Duration, Instant};

/// Fixed-interval driver for the simulation.
///
/// The deadline is primed lazily from the first `remaining()` call and moves
/// forward only when `fire()` reports a due tick, so callers decide when time
/// passes — tests hand in synthetic [`Instant`]s instead of sleeping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(interval: Duration) -> Ticker {
        Ticker {
            interval,
            next: None,
        }
    }

    /// Time left until the next tick is due, priming the deadline if none is
    /// pending
    pub(crate) fn remaining(&mut self, now: Instant) -> Duration {
        let next = *self.next.get_or_insert(now + self.interval);
        next.saturating_duration_since(now)
    }

    /// Consume a due tick.  Returns `false` when the deadline has not passed
    /// (or none is pending).  Reschedules from `now` rather than from the old
    /// deadline: a stall longer than the interval produces a single step and
    /// one visible time skip, never a burst of catch-up steps.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Change the tick interval.  The pending deadline is dropped, so the new
    /// cadence starts counting from the next `remaining()` call.
    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.next = None;
    }

    /// Forget the pending deadline.  Used around pauses so that time spent
    /// paused is not counted against the next tick.
    pub(crate) fn reset(&mut self) {
        self.next = None;
    }
}
