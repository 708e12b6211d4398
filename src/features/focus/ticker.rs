//! Periodic tick sources for the focus timer.

use std::time::{Duration, Instant};

/// Something that fires at a fixed interval while armed.
///
/// The host polls the source from its event loop; the timer arms and disarms it.
pub trait TickSource {
    /// Start firing, one interval from now.
    fn arm(&mut self);

    /// Stop firing.
    fn disarm(&mut self);

    /// Whether the source is currently armed.
    fn is_armed(&self) -> bool;

    /// Returns true if an interval has elapsed since the last fire.
    ///
    /// Fires at most once per call. Intervals missed while the process was
    /// not polling are dropped, not replayed.
    fn poll(&mut self) -> bool;
}

/// Wall-clock interval ticker driven by [`Instant`].
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalTicker {
    /// Create a disarmed ticker with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// A disarmed ticker firing once per second.
    #[must_use]
    pub const fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::every_second()
    }
}

impl TickSource for IntervalTicker {
    fn arm(&mut self) {
        self.next_due = Some(Instant::now() + self.interval);
    }

    fn disarm(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    fn poll(&mut self) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };

        let now = Instant::now();
        if now < due {
            return false;
        }

        let next = due + self.interval;
        self.next_due = Some(if next > now { next } else { now + self.interval });
        true
    }
}
