//! Logging setup.
//!
//! Verbosity comes from `-v` flags; `RUST_LOG` overrides it when set. While
//! the terminal UI owns the screen, records go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::QuestError;

/// Map a `-v` count to a level filter.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn builder(verbosity: u8) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_env(Env::default());
    builder
}

/// Log to stderr.
pub fn init_stderr(verbosity: u8) {
    let _ = builder(verbosity).target(Target::Stderr).try_init();
}

/// Log to `path`, appending.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_file(verbosity: u8, path: &Path) -> Result<(), QuestError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = builder(verbosity)
        .target(Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}
