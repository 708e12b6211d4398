//! Stats command implementation.

use std::rc::Rc;

use super::Context;
use crate::cli::args::StatsArgs;
use crate::error::QuestError;
use crate::features::focus::KvSessionStore;
use crate::features::stats::StatsModel;
use crate::output::format_history;
use crate::storage::Database;

/// Print the session history, newest first, with a summary.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or output cannot be encoded.
pub fn stats(ctx: &Context, args: &StatsArgs) -> Result<String, QuestError> {
    let db = Database::open(&ctx.paths)?;
    let model = StatsModel::new(Rc::new(KvSessionStore::new(db)));
    let limit = args.limit.unwrap_or(ctx.config.stats.history_limit);

    format_history(model.sessions(), &model.summary(), limit, ctx.format)
}
