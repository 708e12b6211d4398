//! The focus countdown timer.
//!
//! [`TimerEngine`] counts down one second per [`tick`](TimerEngine::tick) and
//! appends a [`Session`] to the log when it reaches zero. Ticks drive the
//! countdown; the recorded duration comes from the wall clock, so a stalled
//! tick source delays completion without shortening the recorded session.

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::session::Session;
use super::storage::SessionStore;
use super::ticker::{IntervalTicker, TickSource};
use crate::core::{Clock, SystemClock};

/// Default countdown length: 25 minutes.
pub const DEFAULT_DURATION_SECONDS: i64 = 25 * 60;

/// Where the countdown is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Full duration remaining, not started
    Idle,
    /// Counting down
    Running,
    /// Stopped part-way through a cycle
    Paused,
    /// Reached zero
    Finished,
}

impl std::fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Ready"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Change notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown started or resumed.
    Started { resumed: bool },
    /// The countdown was paused.
    Paused { seconds_remaining: i64 },
    /// One second elapsed.
    Ticked { seconds_remaining: i64 },
    /// The countdown reached zero and this session was recorded.
    Finished(Session),
    /// The countdown went back to full duration.
    Reset,
}

type Listener = Box<dyn FnMut(&TimerEvent)>;

/// Countdown state machine for one focus timer.
pub struct TimerEngine {
    total_seconds: i64,
    seconds_remaining: i64,
    is_running: bool,
    has_finished_once: bool,
    started_at: Option<DateTime<Utc>>,
    store: Rc<dyn SessionStore>,
    clock: Rc<dyn Clock>,
    ticker: Box<dyn TickSource>,
    listeners: Vec<Listener>,
}

impl TimerEngine {
    /// Create an idle timer of `total_seconds`, recording into `store`.
    ///
    /// Uses the system clock and a one-second [`IntervalTicker`].
    #[must_use]
    pub fn new(total_seconds: i64, store: Rc<dyn SessionStore>) -> Self {
        Self {
            total_seconds,
            seconds_remaining: total_seconds,
            is_running: false,
            has_finished_once: false,
            started_at: None,
            store,
            clock: Rc::new(SystemClock),
            ticker: Box::new(IntervalTicker::every_second()),
            listeners: Vec::new(),
        }
    }

    /// Replace the wall clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the tick source.
    #[must_use]
    pub fn with_ticker(mut self, ticker: Box<dyn TickSource>) -> Self {
        self.ticker = ticker;
        self
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&TimerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Start a fresh cycle or resume a paused one.
    ///
    /// Does nothing while running. A finished timer is reset first.
    pub fn start(&mut self) {
        if self.is_running {
            return;
        }

        if self.seconds_remaining <= 0 {
            self.reset();
        }

        let fresh = self.seconds_remaining == self.total_seconds && self.started_at.is_none();
        if fresh {
            self.started_at = Some(self.clock.now());
        }

        self.is_running = true;
        self.ticker.arm();
        log::debug!(
            "timer started ({}s remaining, fresh: {fresh})",
            self.seconds_remaining
        );
        self.emit(&TimerEvent::Started { resumed: !fresh });
    }

    /// Pause a running countdown, keeping its progress.
    pub fn pause(&mut self) {
        if !self.is_running {
            return;
        }

        self.is_running = false;
        self.ticker.disarm();
        log::debug!("timer paused ({}s remaining)", self.seconds_remaining);
        self.emit(&TimerEvent::Paused {
            seconds_remaining: self.seconds_remaining,
        });
    }

    /// Pause if running, start otherwise.
    pub fn start_or_pause(&mut self) {
        if self.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Return to a full, stopped countdown.
    pub fn reset(&mut self) {
        self.ticker.disarm();
        self.seconds_remaining = self.total_seconds;
        self.is_running = false;
        self.has_finished_once = false;
        self.started_at = None;
        log::debug!("timer reset to {}s", self.total_seconds);
        self.emit(&TimerEvent::Reset);
    }

    /// Advance the countdown by one second.
    ///
    /// Ignored unless running. Reaching zero finishes the cycle and records
    /// exactly one session.
    pub fn tick(&mut self) {
        if !self.is_running {
            return;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            self.emit(&TimerEvent::Ticked {
                seconds_remaining: self.seconds_remaining,
            });
        }

        if self.seconds_remaining <= 0 {
            self.finish();
        }
    }

    /// Deliver a tick if the tick source has fired.
    ///
    /// Returns true if a tick was delivered.
    pub fn pump(&mut self) -> bool {
        if self.is_running && self.ticker.poll() {
            self.tick();
            true
        } else {
            false
        }
    }

    fn finish(&mut self) {
        self.is_running = false;
        self.has_finished_once = true;
        self.ticker.disarm();

        let session = self.record_session();
        self.emit(&TimerEvent::Finished(session));
    }

    fn record_session(&self) -> Session {
        let ended_at = self.clock.now();
        let started_at = self
            .started_at
            .unwrap_or_else(|| ended_at - Duration::seconds(self.total_seconds));
        let session = Session::new(started_at, ended_at);

        match self.store.append_session(&session) {
            Ok(()) => log::info!(
                "recorded session {} ({}s)",
                session.id(),
                session.duration_seconds()
            ),
            Err(e) => log::error!("failed to record session {}: {e}", session.id()),
        }

        session
    }

    fn emit(&mut self, event: &TimerEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    #[must_use]
    pub const fn seconds_remaining(&self) -> i64 {
        self.seconds_remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Whether the current cycle reached zero. Cleared only by [`reset`](Self::reset).
    #[must_use]
    pub const fn has_finished_once(&self) -> bool {
        self.has_finished_once
    }

    /// When the current cycle started counting down, if it has.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Whether the tick source is currently armed.
    #[must_use]
    pub fn ticker_armed(&self) -> bool {
        self.ticker.is_armed()
    }

    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        if self.is_running {
            TimerPhase::Running
        } else if self.has_finished_once && self.seconds_remaining <= 0 {
            TimerPhase::Finished
        } else if self.seconds_remaining == self.total_seconds {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Progress through the current cycle (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds <= 0 {
            return 1.0;
        }
        1.0 - (self.seconds_remaining as f64 / self.total_seconds as f64)
    }
}
