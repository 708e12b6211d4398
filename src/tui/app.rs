//! Application state for the TUI.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::FocusConfig;
use crate::features::focus::{format_duration, TimerEngine, TimerEvent};
use crate::features::stats::StatsModel;

/// Visible tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Countdown timer.
    Focus,
    /// Session history.
    Stats,
}

impl Tab {
    /// Position in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Focus => 0,
            Self::Stats => 1,
        }
    }

    /// Tab titles in display order.
    pub const TITLES: [&'static str; 2] = ["Focus", "Stats"];
}

/// Application state.
pub struct App {
    /// The countdown.
    pub engine: TimerEngine,
    /// Session history read model.
    pub stats: StatsModel,
    /// Current tab.
    pub tab: Tab,
    /// Selected row on the stats tab.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Reset was requested once and awaits confirmation.
    pub pending_reset: bool,
    confirm_reset: bool,
    ring_bell: bool,
    inbox: Rc<RefCell<Vec<TimerEvent>>>,
}

impl App {
    /// Create the app around an engine and stats model.
    #[must_use]
    pub fn new(mut engine: TimerEngine, stats: StatsModel, config: &FocusConfig, tab: Tab) -> Self {
        let inbox = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&inbox);
        engine.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        Self {
            engine,
            stats,
            tab,
            selected: 0,
            status: None,
            pending_reset: false,
            confirm_reset: config.confirm_reset,
            ring_bell: config.ring_bell,
            inbox,
        }
    }

    /// Start or pause the countdown.
    pub fn toggle_timer(&mut self) {
        self.pending_reset = false;
        self.engine.start_or_pause();
    }

    /// Reset the countdown, asking once for confirmation while it runs.
    pub fn request_reset(&mut self) {
        if self.confirm_reset && self.engine.is_running() && !self.pending_reset {
            self.pending_reset = true;
            self.status = Some("Press r again to reset the running timer".to_string());
            return;
        }

        self.pending_reset = false;
        self.engine.reset();
    }

    /// Drop a pending reset confirmation.
    pub fn cancel_pending(&mut self) {
        if self.pending_reset {
            self.pending_reset = false;
            self.status = None;
        }
    }

    /// Switch to the other tab.
    pub fn next_tab(&mut self) {
        let next = match self.tab {
            Tab::Focus => Tab::Stats,
            Tab::Stats => Tab::Focus,
        };
        self.show_tab(next);
    }

    /// Switch to `tab`, reloading stats when they come into view.
    pub fn show_tab(&mut self, tab: Tab) {
        self.cancel_pending();
        if tab == Tab::Stats && self.tab != Tab::Stats {
            self.reload_stats();
        }
        self.tab = tab;
    }

    /// Reload the session history.
    pub fn reload_stats(&mut self) {
        self.stats.load();
        let len = self.stats.sessions().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.stats.sessions().len() {
            self.selected += 1;
        }
    }

    /// Advance the timer if its tick source fired, then apply timer events.
    ///
    /// Returns true when a countdown just finished and the bell should ring.
    pub fn on_loop(&mut self) -> bool {
        self.engine.pump();

        let events: Vec<TimerEvent> = self.inbox.borrow_mut().drain(..).collect();
        let mut ring = false;

        for event in events {
            match event {
                TimerEvent::Started { resumed } => {
                    self.status = Some(if resumed { "Resumed" } else { "Started" }.to_string());
                }
                TimerEvent::Paused { .. } => self.status = Some("Paused".to_string()),
                TimerEvent::Reset => self.status = Some("Timer reset".to_string()),
                TimerEvent::Ticked { .. } => {}
                TimerEvent::Finished(session) => {
                    self.status = Some(format!(
                        "Session complete: {}",
                        format_duration(session.duration_seconds())
                    ));
                    if self.tab == Tab::Stats {
                        self.reload_stats();
                    }
                    ring = self.ring_bell;
                }
            }
        }

        ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{InMemorySessionStore, IntervalTicker, SessionStore};

    fn app_with(total: i64, config: &FocusConfig) -> (App, Rc<InMemorySessionStore>) {
        let store = Rc::new(InMemorySessionStore::new());
        let engine = TimerEngine::new(total, store.clone())
            .with_ticker(Box::new(IntervalTicker::new(std::time::Duration::ZERO)));
        let stats = StatsModel::new(store.clone());
        (App::new(engine, stats, config, Tab::Focus), store)
    }

    #[test]
    fn test_toggle_timer() {
        let (mut app, _) = app_with(10, &FocusConfig::default());

        app.toggle_timer();
        assert!(app.engine.is_running());
        app.on_loop();
        assert_eq!(app.status.as_deref(), Some("Started"));

        app.toggle_timer();
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_reset_needs_confirmation_while_running() {
        let (mut app, _) = app_with(10, &FocusConfig::default());
        app.toggle_timer();
        app.on_loop();

        app.request_reset();
        assert!(app.pending_reset);
        assert!(app.engine.is_running());

        app.request_reset();
        assert!(!app.pending_reset);
        assert!(!app.engine.is_running());
        assert_eq!(app.engine.seconds_remaining(), 10);
    }

    #[test]
    fn test_reset_without_confirmation() {
        let config = FocusConfig {
            confirm_reset: false,
            ..FocusConfig::default()
        };
        let (mut app, _) = app_with(10, &config);
        app.toggle_timer();

        app.request_reset();
        assert!(!app.engine.is_running());
    }

    #[test]
    fn test_finish_rings_and_reports() {
        let (mut app, store) = app_with(2, &FocusConfig::default());
        app.toggle_timer();

        assert!(!app.on_loop());
        assert!(app.on_loop());
        assert!(app
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Session complete")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_bell_can_be_disabled() {
        let config = FocusConfig {
            ring_bell: false,
            ..FocusConfig::default()
        };
        let (mut app, _) = app_with(1, &config);
        app.toggle_timer();

        assert!(!app.on_loop());
        assert!(app.engine.has_finished_once());
    }

    #[test]
    fn test_stats_reload_on_tab_entry() {
        let (mut app, store) = app_with(1, &FocusConfig::default());
        assert!(app.stats.is_empty());

        app.toggle_timer();
        app.on_loop();
        assert_eq!(store.load_sessions().len(), 1);
        assert!(app.stats.is_empty());

        app.next_tab();
        assert_eq!(app.tab, Tab::Stats);
        assert_eq!(app.stats.sessions().len(), 1);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let (mut app, _) = app_with(1, &FocusConfig::default());
        app.select_next();
        assert_eq!(app.selected, 0);
        app.select_previous();
        assert_eq!(app.selected, 0);
    }
}
