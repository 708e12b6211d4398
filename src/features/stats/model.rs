//! Stats read model: the session history, newest first.

use std::rc::Rc;

use chrono::{Local, NaiveDate, TimeZone};

use super::summary::StatsSummary;
use crate::features::focus::{Session, SessionStore};

/// Sorted view over the session log, refreshed on demand.
pub struct StatsModel {
    store: Rc<dyn SessionStore>,
    sessions: Vec<Session>,
}

impl StatsModel {
    /// Create the model and load the current history.
    #[must_use]
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let mut model = Self {
            store,
            sessions: Vec::new(),
        };
        model.load();
        model
    }

    /// Reload the log and sort it by start time, most recent first.
    ///
    /// The sort is stable: sessions with equal start times keep their stored order.
    pub fn load(&mut self) {
        let mut sessions = self.store.load_sessions();
        sessions.sort_by(|a, b| b.started_at().cmp(&a.started_at()));
        log::debug!("stats loaded {} sessions", sessions.len());
        self.sessions = sessions;
    }

    /// Sessions as of the last [`load`](Self::load), newest first.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Summary of the loaded sessions in the local timezone.
    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        self.summary_in(Local::now().date_naive(), &Local)
    }

    /// Summary of the loaded sessions for an explicit date and timezone.
    #[must_use]
    pub fn summary_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> StatsSummary {
        StatsSummary::from_sessions(&self.sessions, today, tz)
    }
}
