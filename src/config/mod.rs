//! Configuration management for questchat.
//!
//! This module handles loading and saving configuration from the data directory.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FocusConfig, GeneralConfig, StatsConfig};
