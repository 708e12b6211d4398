//! Focus session storage.
//!
//! The session log is one JSON array stored under a single key. Every
//! mutation reads the whole array, changes it, and writes it back.

use std::cell::RefCell;

use super::session::Session;
use crate::error::QuestError;
use crate::storage::KeyValueStore;

/// Key under which the session log is stored.
pub const SESSIONS_KEY: &str = "qc_sessions";

/// Persistence for completed sessions.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Load every stored session in insertion order.
    ///
    /// A missing or unreadable log loads as empty.
    fn load_sessions(&self) -> Vec<Session>;

    /// Replace the stored log with `sessions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be encoded or written.
    fn save_sessions(&self, sessions: &[Session]) -> Result<(), QuestError>;

    /// Append one session to the end of the log.
    ///
    /// Read-modify-write: not safe with more than one writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated log cannot be written.
    fn append_session(&self, session: &Session) -> Result<(), QuestError> {
        let mut sessions = self.load_sessions();
        sessions.push(session.clone());
        self.save_sessions(&sessions)
    }
}

/// Session log kept in a [`KeyValueStore`].
pub struct KvSessionStore<K> {
    kv: K,
}

impl<K: KeyValueStore> KvSessionStore<K> {
    /// Create a session log on top of `kv`.
    pub const fn new(kv: K) -> Self {
        Self { kv }
    }
}

impl<K: KeyValueStore> SessionStore for KvSessionStore<K> {
    fn load_sessions(&self) -> Vec<Session> {
        let bytes = match self.kv.get(SESSIONS_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read session log, treating it as empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(sessions) => sessions,
            Err(e) => {
                log::warn!("session log is not valid JSON, treating it as empty: {e}");
                Vec::new()
            }
        }
    }

    fn save_sessions(&self, sessions: &[Session]) -> Result<(), QuestError> {
        let bytes = serde_json::to_vec(sessions)?;
        self.kv.set(SESSIONS_KEY, &bytes)?;
        log::debug!("saved {} sessions", sessions.len());
        Ok(())
    }
}

/// Session log held in memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RefCell<Vec<Session>>,
}

impl InMemorySessionStore {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log pre-filled with `sessions`.
    #[must_use]
    pub const fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions: RefCell::new(sessions),
        }
    }

    /// Number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.borrow().is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load_sessions(&self) -> Vec<Session> {
        self.sessions.borrow().clone()
    }

    fn save_sessions(&self, sessions: &[Session]) -> Result<(), QuestError> {
        *self.sessions.borrow_mut() = sessions.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// Key-value store whose reads always fail; writes are kept.
    #[derive(Default)]
    struct UnreadableKv {
        written: RefCell<Option<Vec<u8>>>,
    }

    impl KeyValueStore for UnreadableKv {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, QuestError> {
            Err(QuestError::Database("disk I/O error".to_string()))
        }

        fn set(&self, _key: &str, value: &[u8]) -> Result<(), QuestError> {
            *self.written.borrow_mut() = Some(value.to_vec());
            Ok(())
        }
    }

    fn create_test_storage() -> KvSessionStore<Database> {
        let db = Database::open_in_memory().unwrap();
        KvSessionStore::new(db)
    }

    fn session_at(h: u32, m: u32) -> Session {
        let start: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 1, h, m, 0).unwrap();
        Session::new(start, start + Duration::minutes(25))
    }

    #[test]
    fn test_load_empty() {
        let storage = create_test_storage();
        assert!(storage.load_sessions().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let storage = create_test_storage();
        let sessions = vec![session_at(10, 0), session_at(9, 0), session_at(11, 0)];

        storage.save_sessions(&sessions).unwrap();

        assert_eq!(storage.load_sessions(), sessions);
    }

    #[test]
    fn test_save_of_load_is_idempotent() {
        let storage = create_test_storage();
        storage
            .save_sessions(&[session_at(10, 0), session_at(10, 30)])
            .unwrap();

        let before = storage.load_sessions();
        storage.save_sessions(&before).unwrap();

        assert_eq!(storage.load_sessions(), before);
    }

    #[test]
    fn test_append_adds_exactly_one() {
        let storage = create_test_storage();
        storage.save_sessions(&[session_at(9, 0)]).unwrap();

        let new = session_at(10, 0);
        storage.append_session(&new).unwrap();

        let loaded = storage.load_sessions();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.last(), Some(&new));
    }

    #[test]
    fn test_corrupt_log_loads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set(SESSIONS_KEY, b"{ definitely not a list").unwrap();
        let storage = KvSessionStore::new(db);

        assert!(storage.load_sessions().is_empty());
    }

    #[test]
    fn test_append_after_corrupt_log_starts_over() {
        let db = Database::open_in_memory().unwrap();
        db.set(SESSIONS_KEY, b"garbage").unwrap();
        let storage = KvSessionStore::new(db);

        let new = session_at(10, 0);
        storage.append_session(&new).unwrap();

        assert_eq!(storage.load_sessions(), vec![new]);
    }

    #[test]
    fn test_failed_read_loads_empty() {
        let storage = KvSessionStore::new(UnreadableKv::default());
        assert!(storage.load_sessions().is_empty());
    }

    #[test]
    fn test_append_after_failed_read_still_writes() {
        let storage = KvSessionStore::new(UnreadableKv::default());
        let new = session_at(10, 0);

        storage.append_session(&new).unwrap();

        let written = storage.kv.written.borrow().clone().unwrap();
        let sessions: Vec<Session> = serde_json::from_slice(&written).unwrap();
        assert_eq!(sessions, vec![new]);
    }

    #[test]
    fn test_in_memory_store() {
        let storage = InMemorySessionStore::new();
        assert!(storage.is_empty());

        let first = session_at(8, 0);
        storage.append_session(&first).unwrap();
        storage.append_session(&session_at(9, 0)).unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.load_sessions()[0], first);
    }
}
