use colored::Colorize;

use classicrypt::adapters::history::json_history_logger::JsonHistoryLogger;
use classicrypt::core::models::operation::OperationRecord;
use classicrypt::core::traits::history::HistoryLogger;
use classicrypt::{CipherKind, Direction, Result};

use crate::cli::context::Context;
use crate::cli::output;

/// Execute the `classicrypt log` command.
///
/// Displays the operation history with optional cipher and count filters.
pub fn execute(ctx: &Context, cipher: Option<&str>, last: Option<usize>) -> Result<()> {
    let cipher = cipher.map(str::parse::<CipherKind>).transpose()?;

    if !ctx.config.history.enabled {
        output::warning("History is disabled. Set [history] enabled = true in config.toml");
    }

    let logger = JsonHistoryLogger::from_config(&ctx.config_dir, &ctx.config.history);
    let records = logger.query(cipher)?;

    if records.is_empty() {
        output::header("classicrypt log");
        output::warning("No history entries found");
        if cipher.is_some() {
            println!("  Try removing filters to see all entries.");
        }
        return Ok(());
    }

    let skip = last.map_or(0, |n| records.len().saturating_sub(n));
    let display = &records[skip..];

    output::header(&format!("classicrypt log ({} entries)", display.len()));
    println!();

    for record in display {
        print_record(record);
    }

    Ok(())
}

/// Print a single history record as a formatted row.
fn print_record(record: &OperationRecord) {
    let date = record.timestamp.format("%Y-%m-%d %H:%M:%S");
    let direction = match record.direction {
        Direction::Encode => "encode".green().to_string(),
        Direction::Decode => "decode".blue().to_string(),
    };
    let digest: String = record.output_sha256.chars().take(12).collect();

    println!(
        "  {} {} {:<10} {:<10} {} → {} chars {}",
        date.to_string().dimmed(),
        "│".dimmed(),
        record.cipher.id(),
        direction,
        record.input_len,
        record.output_len,
        digest.dimmed(),
    );
}
