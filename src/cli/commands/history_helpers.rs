use classicrypt::adapters::history::json_history_logger::JsonHistoryLogger;
use classicrypt::core::models::operation::OperationRecord;
use classicrypt::core::traits::history::HistoryLogger;

use crate::cli::context::Context;
use crate::cli::output;

/// Record an operation when history is enabled. Warns on failure instead
/// of propagating the error, since history should not block the result.
pub fn log_history(ctx: &Context, record: &OperationRecord) {
    if !ctx.config.history.enabled {
        return;
    }

    let logger = JsonHistoryLogger::from_config(&ctx.config_dir, &ctx.config.history);
    if let Err(e) = logger.log_event(record) {
        tracing::warn!(error = %e, "history write failed");
        output::warning(&format!("Could not write history: {e}"));
    }
}
