//! Output formatting for questchat.
//!
//! Formatters for displaying the session history in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuestError;
use crate::features::focus::Session;
use crate::features::stats::StatsSummary;

pub use json::*;
pub use pretty::*;

/// Format the session history based on output format
///
/// # Errors
///
/// Returns `QuestError::Json` if JSON serialization fails.
pub fn format_history(
    sessions: &[Session],
    summary: &StatsSummary,
    limit: usize,
    format: OutputFormat,
) -> Result<String, QuestError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions, summary, limit)),
        OutputFormat::Json => format_history_json(sessions, summary, limit),
    }
}
