//! Aggregate figures over the session history.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::features::focus::{format_duration, Session};

/// Totals derived from a list of sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of recorded sessions
    pub total_sessions: usize,
    /// Sum of all session durations
    pub total_seconds: i64,
    /// Mean session duration
    pub average_seconds: f64,
    /// Longest single session
    pub longest_seconds: i64,
    /// Sessions started today
    pub today_sessions: usize,
    /// Focus time started today
    pub today_seconds: i64,
    /// Consecutive days with at least one session, ending today or yesterday
    pub streak_days: i64,
}

impl StatsSummary {
    /// Summarize `sessions`, bucketing days in `tz` with `today` as the current date.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sessions<Tz: TimeZone>(sessions: &[Session], today: NaiveDate, tz: &Tz) -> Self {
        let day_of = |s: &Session| s.started_at().with_timezone(tz).date_naive();

        let total_sessions = sessions.len();
        let total_seconds: i64 = sessions.iter().map(Session::duration_seconds).sum();
        let average_seconds = if total_sessions > 0 {
            total_seconds as f64 / total_sessions as f64
        } else {
            0.0
        };
        let longest_seconds = sessions
            .iter()
            .map(Session::duration_seconds)
            .max()
            .unwrap_or(0);

        let todays: Vec<&Session> = sessions.iter().filter(|s| day_of(*s) == today).collect();
        let today_seconds = todays.iter().map(|s| s.duration_seconds()).sum();

        let days: BTreeSet<NaiveDate> = sessions.iter().map(day_of).collect();

        Self {
            total_sessions,
            total_seconds,
            average_seconds,
            longest_seconds,
            today_sessions: todays.len(),
            today_seconds,
            streak_days: streak_ending(&days, today),
        }
    }

    /// Render the summary as aligned lines of text.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn format(&self) -> String {
        let mut lines = vec![
            format!("Sessions: {}", self.total_sessions),
            format!("Focused:  {}", format_duration(self.total_seconds)),
            format!("Average:  {}", format_duration(self.average_seconds.round() as i64)),
            format!("Longest:  {}", format_duration(self.longest_seconds)),
            format!(
                "Today:    {} ({} session{})",
                format_duration(self.today_seconds),
                self.today_sessions,
                if self.today_sessions == 1 { "" } else { "s" }
            ),
        ];

        if self.streak_days > 0 {
            lines.push(format!(
                "Streak:   {} day{}",
                self.streak_days,
                if self.streak_days == 1 { "" } else { "s" }
            ));
        }

        lines.join("\n")
    }
}

fn streak_ending(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> i64 {
    let mut check = today;
    if !days.contains(&check) {
        // No session yet today: a streak through yesterday still counts
        check = today - Duration::days(1);
    }

    let mut streak = 0;
    while days.contains(&check) {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}
