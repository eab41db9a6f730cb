use colored::Colorize;

use classicrypt::{CipherKind, Result};

use crate::cli::output;

/// Execute the `classicrypt list` command.
pub fn execute() -> Result<()> {
    output::header("Available ciphers");
    println!();

    for kind in CipherKind::ALL {
        let decode_note = if kind.always_decodable() {
            String::new()
        } else {
            " (decrypt needs an invertible key)".dimmed().to_string()
        };
        println!(
            "  {:<10} {}{}",
            kind.id().cyan(),
            kind.display_name().bold(),
            decode_note
        );
        println!("  {:<10} {}", "", kind.description().dimmed());
    }

    Ok(())
}
