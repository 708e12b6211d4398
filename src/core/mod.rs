//! Core abstractions for questchat.
//!
//! Shared capabilities injected into features.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};
