//! Focus timer and session log.
//!
//! - A countdown timer driven one tick per second
//! - Completed sessions recorded on reaching zero
//! - A persistent, append-only session log

pub mod format;
pub mod session;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use format::{format_clock, format_duration, parse_duration};
pub use session::Session;
pub use storage::{InMemorySessionStore, KvSessionStore, SessionStore, SESSIONS_KEY};
pub use ticker::{IntervalTicker, TickSource};
pub use timer::{TimerEngine, TimerEvent, TimerPhase, DEFAULT_DURATION_SECONDS};
