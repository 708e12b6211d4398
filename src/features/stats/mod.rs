//! Focus statistics.
//!
//! - Session history sorted newest first
//! - Totals, averages, today's figures and day streaks

pub mod model;
pub mod summary;

pub use model::StatsModel;
pub use summary::StatsSummary;
