mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let result = Context::load(args.config.as_deref(), args.raw).and_then(|ctx| {
        match &args.command {
            Commands::Encrypt { cipher } => cli::commands::encrypt::execute(&ctx, cipher),
            Commands::Decrypt { cipher } => cli::commands::decrypt::execute(&ctx, cipher),
            Commands::List => cli::commands::list::execute(),
            Commands::Log { cipher, last } => {
                cli::commands::log::execute(&ctx, cipher.as_deref(), *last)
            }
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `CLASSICRYPT_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CLASSICRYPT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
