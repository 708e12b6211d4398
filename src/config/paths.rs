//! Path resolution for questchat configuration and data files.
//!
//! All questchat data is stored in `~/.questchat/` unless overridden by
//! `--data-dir` or `QUESTCHAT_HOME`:
//! - `config.yaml` - Main configuration file
//! - `questchat.db` - `SQLite` key-value store holding the session log
//! - `questchat.log` - Log output while the terminal UI is open

use std::path::PathBuf;

use crate::error::QuestError;

/// Paths to questchat configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.questchat/`
    pub root: PathBuf,
    /// Config file: `~/.questchat/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.questchat/questchat.db`
    pub database: PathBuf,
    /// Log file used by the TUI: `~/.questchat/questchat.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuestError> {
        let home = std::env::var("HOME").map_err(|_| {
            QuestError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".questchat")))
    }

    /// Resolve paths from an explicit override, falling back to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory cannot be determined.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, QuestError> {
        match data_dir {
            Some(root) => Ok(Self::with_root(root)),
            None => Self::new(),
        }
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("questchat.db"),
            log_file: root.join("questchat.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), QuestError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                QuestError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
