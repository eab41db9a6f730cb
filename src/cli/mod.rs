pub mod commands;
pub mod context;
pub mod output;

use clap::{Args, Parser, Subcommand};

use classicrypt::config::app_config::AppConfig;
use classicrypt::CipherSpec;

/// Classical ciphers on the command line.
#[derive(Parser, Debug)]
#[command(name = "classicrypt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to alternative config file
    #[arg(long, global = true, env = "CLASSICRYPT_CONFIG")]
    pub config: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pass the input through unchanged instead of stripping non-letters
    #[arg(long, global = true)]
    pub raw: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt {
        #[command(subcommand)]
        cipher: CipherArgs,
    },

    /// Decrypt text with a classical cipher
    Decrypt {
        #[command(subcommand)]
        cipher: CipherArgs,
    },

    /// List the available ciphers
    List,

    /// Show operation history
    Log {
        /// Filter by cipher (caesar, railfence, playfair, hill, poly)
        #[arg(long)]
        cipher: Option<String>,
        /// Show last N entries
        #[arg(long)]
        last: Option<usize>,
    },
}

/// Text argument shared by every cipher.
#[derive(Args, Debug)]
pub struct TextInput {
    /// Text to transform (read from stdin when omitted)
    pub text: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CipherArgs {
    /// Shift every letter by a fixed amount
    Caesar {
        /// Number of positions to shift (may be negative)
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,
        #[command(flatten)]
        input: TextInput,
    },

    /// Zig-zag transposition over several rails
    #[command(name = "railfence")]
    RailFence {
        /// Number of rails (at least 2)
        #[arg(short, long)]
        rails: usize,
        #[command(flatten)]
        input: TextInput,
    },

    /// Digraph substitution with a keyed 5x5 grid
    Playfair {
        /// Keyword used to build the grid
        #[arg(short, long)]
        key: String,
        #[command(flatten)]
        input: TextInput,
    },

    /// Block substitution with a square key matrix mod 26
    Hill {
        /// Comma-separated key matrix, row-major (default from config)
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        matrix: Vec<i64>,
        #[command(flatten)]
        input: TextInput,
    },

    /// Repeating-key (Vigenère) substitution
    Poly {
        /// Alphabetic key
        #[arg(short, long)]
        key: String,
        #[command(flatten)]
        input: TextInput,
    },
}

impl CipherArgs {
    pub fn input(&self) -> &TextInput {
        match self {
            CipherArgs::Caesar { input, .. }
            | CipherArgs::RailFence { input, .. }
            | CipherArgs::Playfair { input, .. }
            | CipherArgs::Hill { input, .. }
            | CipherArgs::Poly { input, .. } => input,
        }
    }

    /// Turn the parsed arguments into a cipher selection, filling
    /// unspecified key material from the config.
    pub fn to_spec(&self, config: &AppConfig) -> CipherSpec {
        match self {
            CipherArgs::Caesar { shift, .. } => CipherSpec::Caesar { shift: *shift },
            CipherArgs::RailFence { rails, .. } => CipherSpec::RailFence { rails: *rails },
            CipherArgs::Playfair { key, .. } => CipherSpec::Playfair {
                key: key.clone(),
                filler: config.playfair.filler,
            },
            CipherArgs::Hill { matrix, .. } => CipherSpec::Hill {
                matrix: if matrix.is_empty() {
                    config.hill.matrix.clone()
                } else {
                    matrix.clone()
                },
                filler: config.hill.filler,
            },
            CipherArgs::Poly { key, .. } => CipherSpec::Poly { key: key.clone() },
        }
    }
}
