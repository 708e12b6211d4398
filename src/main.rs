use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use questchat::cli::args::{Cli, Commands};
use questchat::cli::commands::{self, Context};
use questchat::config::{Config, Paths};
use questchat::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.data_dir.clone()).context("resolving data directory")?;

    // The focus view owns the screen, so its logs go to a file.
    if matches!(cli.command, Commands::Focus(_)) {
        paths.ensure_dirs()?;
        logging::init_file(cli.verbose, &paths.log_file)
            .with_context(|| format!("opening log file {}", paths.log_file.display()))?;
    } else {
        logging::init_stderr(cli.verbose);
    }

    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();

    let ctx = Context {
        format: cli.output.unwrap_or(config.general.default_output),
        paths,
        config,
    };

    let output = match &cli.command {
        Commands::Focus(args) => commands::focus(&ctx, args)?,
        Commands::Stats(args) => commands::stats(&ctx, args)?,
        Commands::Config(args) => commands::config(&ctx, &args.command)?,
        Commands::Completions { shell } => commands::completions(*shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
