//! Focus command implementation.
//!
//! This is the composition root for the interactive timer: it builds the
//! session store, timer and stats model and hands them to the TUI.

use std::rc::Rc;

use super::Context;
use crate::cli::args::FocusArgs;
use crate::config::Config;
use crate::error::QuestError;
use crate::features::focus::{parse_duration, KvSessionStore, SessionStore, TimerEngine};
use crate::features::stats::StatsModel;
use crate::storage::Database;
use crate::tui::{self, App, Tab};

/// Open the interactive focus timer.
///
/// # Errors
///
/// Returns an error if the duration is invalid, the database cannot be opened,
/// or the terminal cannot be driven.
pub fn focus(ctx: &Context, args: &FocusArgs) -> Result<String, QuestError> {
    let total_seconds = resolve_duration(args.duration.as_deref(), &ctx.config)?;

    let db = Database::open(&ctx.paths)?;
    let store: Rc<dyn SessionStore> = Rc::new(KvSessionStore::new(db));
    let engine = TimerEngine::new(total_seconds, Rc::clone(&store));
    let stats = StatsModel::new(store);

    let tab = if args.stats { Tab::Stats } else { Tab::Focus };
    let mut app = App::new(engine, stats, &ctx.config.focus, tab);
    log::info!("focus timer opened ({total_seconds}s)");

    tui::run(&mut app)?;
    Ok(String::new())
}

/// Countdown length in seconds from `--duration` or the config.
fn resolve_duration(arg: Option<&str>, config: &Config) -> Result<i64, QuestError> {
    match arg {
        Some(text) => parse_duration(text)
            .map(|d| d.num_seconds())
            .ok_or_else(|| QuestError::InvalidArgument(format!("Invalid duration: {text}"))),
        None if config.focus.duration_minutes == 0 => Err(QuestError::Config(
            "focus.duration_minutes must be at least 1".to_string(),
        )),
        None => Ok(config.focus.duration_seconds()),
    }
}
