use colored::Colorize;

use crate::features::focus::{format_duration, Session};
use crate::features::stats::StatsSummary;

/// Message shown when no session has been recorded yet.
pub const NO_SESSIONS: &str = "No sessions yet. Start a focus timer to see stats here.";

/// Format the session history as a pretty table followed by the summary
pub fn format_history_pretty(sessions: &[Session], summary: &StatsSummary, limit: usize) -> String {
    if sessions.is_empty() {
        return NO_SESSIONS.dimmed().to_string();
    }

    let mut output = format!("{}\n", "Focus Sessions".bold());
    output.push_str(&"═".repeat(40));
    output.push('\n');
    output.push_str(&format!("{:<18} {:>10}\n", "Started", "Duration"));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for session in sessions.iter().take(limit) {
        let started = session.started_at_local().format("%Y-%m-%d %H:%M").to_string();
        let duration = format_duration(session.duration_seconds());
        output.push_str(&format!("{:<18} {:>10}\n", started, duration.green()));
    }

    if sessions.len() > limit {
        let hidden = sessions.len() - limit;
        output.push_str(&format!("{}\n", format!("… {hidden} older").dimmed()));
    }

    output.push('\n');
    output.push_str(&summary.format());
    output
}
