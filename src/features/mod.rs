//! Feature implementations for questchat.
//!
//! - Focus timer and session log
//! - Statistics over recorded sessions

pub mod focus;
pub mod stats;
