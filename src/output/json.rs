//! JSON output formatting for questchat.

use serde::Serialize;
use serde_json::json;

use crate::error::QuestError;
use crate::features::focus::Session;
use crate::features::stats::StatsSummary;

/// Format the newest `limit` sessions and the summary as JSON
///
/// `count` is the number of sessions listed, `total` the size of the whole log.
///
/// # Errors
///
/// Returns `QuestError::Json` if serialization fails.
pub fn format_history_json(
    sessions: &[Session],
    summary: &StatsSummary,
    limit: usize,
) -> Result<String, QuestError> {
    let shown = &sessions[..sessions.len().min(limit)];
    let output = json!({
        "count": shown.len(),
        "total": sessions.len(),
        "summary": summary,
        "sessions": shown
    });
    to_json(&output)
}

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `QuestError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuestError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_format_history_json() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let sessions = vec![Session::new(start, start + Duration::minutes(25))];
        let summary = StatsSummary::from_sessions(
            &sessions,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            &Utc,
        );

        let json = format_history_json(&sessions, &summary, 50).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["total"], 1);
        assert_eq!(value["summary"]["total_seconds"], 1500);
        assert_eq!(value["sessions"][0]["durationSeconds"], 1500);
    }

    #[test]
    fn test_empty_history_json() {
        let summary =
            StatsSummary::from_sessions(&[], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), &Utc);
        let json = format_history_json(&[], &summary, 50).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 0);
        assert_eq!(value["total"], 0);
        assert_eq!(value["sessions"], serde_json::json!([]));
    }

    #[test]
    fn test_limited_history_reports_total() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let sessions: Vec<Session> = (0..3)
            .map(|i| {
                let begin = start - Duration::hours(i);
                Session::new(begin, begin + Duration::minutes(25))
            })
            .collect();
        let summary = StatsSummary::from_sessions(
            &sessions,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            &Utc,
        );

        let json = format_history_json(&sessions, &summary, 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["total"], 3);
        assert_eq!(value["sessions"].as_array().unwrap().len(), 2);
        assert_eq!(value["summary"]["total_sessions"], 3);
    }
}
