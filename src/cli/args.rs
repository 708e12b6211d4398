use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "questchat")]
#[command(about = "A focus timer that keeps a log of every completed session")]
#[command(long_about = "questchat - focus timer and session stats

Run a countdown in the terminal; every countdown that reaches zero is
recorded in a local session log, which the stats view lists newest first.

QUICK START:
  questchat focus              Open the 25-minute focus timer
  questchat focus -d 50m       Open a 50-minute timer
  questchat stats              Show recorded sessions and totals

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  questchat <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding the config file, database and log
    ///
    /// Defaults to ~/.questchat
    #[arg(long, env = "QUESTCHAT_HOME", global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the focus timer
    ///
    /// Starts an interactive terminal view with a countdown and a stats tab.
    /// A countdown that reaches zero is recorded in the session log.
    ///
    /// # Keys
    ///
    ///   space    Start or pause
    ///   r        Reset
    ///   tab      Switch between Focus and Stats
    ///   q        Quit
    ///
    /// # Examples
    ///
    ///   questchat focus              Use the configured duration (25m)
    ///   questchat focus -d 50m       Custom 50-minute countdown
    ///   questchat focus -d 90s       Short countdown for a quick test
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Show recorded sessions, newest first
    ///
    /// Lists completed focus sessions with their start time and length,
    /// followed by totals, today's focus time and the current day streak.
    ///
    /// # Examples
    ///
    ///   questchat stats
    ///   questchat stats --limit 10
    ///   questchat stats -o json
    #[command(alias = "s")]
    Stats(StatsArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    ///
    /// Example: questchat completions bash > ~/.bash_completion.d/questchat
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct FocusArgs {
    /// Countdown length (e.g., 25m, 1h, 90s, 50)
    ///
    /// A bare number is read as minutes. Defaults to `focus.duration_minutes`.
    #[arg(long, short = 'd')]
    pub duration: Option<String>,

    /// Open on the Stats tab instead of the timer
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Maximum number of sessions to list
    ///
    /// Defaults to `stats.history_limit`.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["questchat", "stats"]).unwrap();
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["questchat", "--output", "json", "stats"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["questchat", "stats", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_focus_duration() {
        let cli = Cli::try_parse_from(["questchat", "focus", "-d", "50m"]).unwrap();
        if let Commands::Focus(args) = cli.command {
            assert_eq!(args.duration.as_deref(), Some("50m"));
            assert!(!args.stats);
        } else {
            panic!("Expected Focus command");
        }
    }

    #[test]
    fn test_cli_stats_limit() {
        let cli = Cli::try_parse_from(["questchat", "stats", "--limit", "5"]).unwrap();
        if let Commands::Stats(args) = cli.command {
            assert_eq!(args.limit, Some(5));
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["questchat", "-vv", "stats"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_data_dir() {
        let cli =
            Cli::try_parse_from(["questchat", "--data-dir", "/tmp/qc", "config", "path"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/qc")));
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs {
                command: ConfigCommands::Path
            })
        ));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["questchat", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Zsh }
        ));
    }
}
