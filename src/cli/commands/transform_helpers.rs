use std::io::Read;

use classicrypt::adapters::ciphers;
use classicrypt::core::services::cipher_service::CipherService;
use classicrypt::{CipherSpec, Direction, Result, normalize};

use crate::cli::context::Context;
use crate::cli::{CipherArgs, output};

/// Shared body of `encrypt` and `decrypt`.
///
/// Reads the text, normalizes it unless raw mode is on, runs the cipher
/// and prints the result. History is written afterwards and never fails
/// the command.
pub fn run(ctx: &Context, direction: Direction, args: &CipherArgs) -> Result<()> {
    let spec = args.to_spec(&ctx.config);
    let raw_text = match &args.input().text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };
    let text = prepare_input(&raw_text, &spec, ctx.raw);

    let service = CipherService::new(ciphers::build(&spec)?);
    let transformed = service.run(direction, &text)?;

    output::result(&transformed.text);
    super::history_helpers::log_history(ctx, &transformed.record);

    Ok(())
}

/// Apply the caller-side normalization rule.
///
/// Ciphers that strip non-letters themselves see the same letters either
/// way; raw mode matters for Caesar, Polyalphabetic and Rail Fence.
pub fn prepare_input(text: &str, spec: &CipherSpec, raw: bool) -> String {
    if raw {
        if spec.passes_through_non_letters() {
            text.to_string()
        } else {
            text.trim_end_matches(['\n', '\r']).to_string()
        }
    } else {
        normalize(text)
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}
