//! Command implementations for questchat.
//!
//! Each command receives the resolved [`Context`] and returns the text to print.

mod completions;
mod config;
mod focus;
mod stats;

pub use completions::completions;
pub use config::config;
pub use focus::focus;
pub use stats::stats;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};

/// Everything a command needs from the composition root.
pub struct Context {
    /// Resolved data locations.
    pub paths: Paths,
    /// Loaded configuration.
    pub config: Config,
    /// Output format after applying the config default.
    pub format: OutputFormat,
}
