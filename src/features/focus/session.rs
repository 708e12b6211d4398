//! Completed focus sessions.
//!
//! A [`Session`] is written once, when a countdown reaches zero, and never
//! changes afterwards. Its serialized form is the on-disk format of the
//! session log.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed timer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    duration_seconds: i64,
}

impl Session {
    /// Record a run spanning `started_at..ended_at` under a fresh id.
    ///
    /// The duration is the span rounded to whole seconds, clamped at zero when
    /// the clock went backwards.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        let duration_seconds = rounded_seconds(ended_at - started_at).max(0);
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at,
            duration_seconds,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub const fn ended_at(&self) -> DateTime<Utc> {
        self.ended_at
    }

    #[must_use]
    pub const fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }

    /// Get start time in local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at.with_timezone(&Local)
    }
}

fn rounded_seconds(span: chrono::Duration) -> i64 {
    let millis = span.num_milliseconds();
    let whole = millis.div_euclid(1000);
    if millis.rem_euclid(1000) >= 500 {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_duration_from_span() {
        let session = Session::new(at(10, 0, 0), at(10, 25, 0));
        assert_eq!(session.duration_seconds(), 1500);
    }

    #[test]
    fn test_duration_rounds_to_nearest_second() {
        let start = at(10, 0, 0);
        let session = Session::new(start, start + Duration::milliseconds(1_499));
        assert_eq!(session.duration_seconds(), 1);

        let session = Session::new(start, start + Duration::milliseconds(1_500));
        assert_eq!(session.duration_seconds(), 2);
    }

    #[test]
    fn test_duration_never_negative() {
        let session = Session::new(at(10, 5, 0), at(10, 0, 0));
        assert_eq!(session.duration_seconds(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Session::new(at(9, 0, 0), at(9, 25, 0));
        let b = Session::new(at(9, 0, 0), at(9, 25, 0));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_wire_format_field_names() {
        let session = Session::new(at(10, 0, 0), at(10, 25, 0));
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["durationSeconds"], 1500);
        assert_eq!(value["startedAt"], "2024-03-01T10:00:00Z");
        assert_eq!(value["endedAt"], "2024-03-01T10:25:00Z");
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_decodes_stored_record() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "startedAt": "2024-03-01T10:00:00Z",
            "endedAt": "2024-03-01T10:25:00Z",
            "durationSeconds": 1500
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.started_at(), at(10, 0, 0));
        assert_eq!(session.duration_seconds(), 1500);
    }
}
