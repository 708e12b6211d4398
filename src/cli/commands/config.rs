//! Config command implementation.

use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::QuestError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be rendered or written.
pub fn config(ctx: &Context, cmd: &ConfigCommands) -> Result<String, QuestError> {
    match cmd {
        ConfigCommands::Show => match ctx.format {
            OutputFormat::Json => to_json(&ctx.config),
            OutputFormat::Pretty => ctx.config.to_yaml(),
        },

        ConfigCommands::Path => Ok(ctx.paths.config_file.display().to_string()),

        ConfigCommands::Init { force } => {
            let path = &ctx.paths.config_file;
            if path.exists() && !force {
                return Err(QuestError::Config(format!(
                    "{} already exists. Use --force to overwrite it.",
                    path.display()
                )));
            }

            ctx.paths.ensure_dirs()?;
            Config::default().save_to_path(path)?;
            log::info!("wrote default config to {}", path.display());

            Ok(format!("Wrote {}", path.display()).green().to_string())
        }
    }
}
