//! Command line random string generator.
//!
//! Examples:
//!
//! Five strings of 16 safe characters:
//!
//! ```text
//! cargo run --bin randstr -- --count 5
//! ```
//!
//! A reproducible DNA-like sequence:
//!
//! ```text
//! cargo run --bin randstr -- 40 --alphabet ACGT --seed 7
//! RANDSTR_SEED=7 cargo run --bin randstr -- 40 --alphabet ACGT
//! ```
//!
//! Lowercase identifiers with debug logs on stderr:
//!
//! ```text
//! RANDSTR_LOG_LEVEL=debug cargo run --bin randstr -- 8 --lower
//! ```
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use tracing::info;

use crate::alphabet::Alphabet;
use crate::bootstrap::logging::{self, LogLevel, TraceStyle};
use crate::generator;
use crate::source::{self, Seed};

/// Default length of each generated string.
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of characters in each string.
    #[arg(default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Custom alphabet, up to 64 ASCII characters.
    #[arg(short, long, conflicts_with_all = ["lower", "simple"])]
    pub alphabet: Option<String>,

    /// Use lowercase letters and digits only.
    #[arg(short, long, conflicts_with = "simple")]
    pub lower: bool,

    /// Use the naive generator, one draw per character.
    #[arg(short, long)]
    pub simple: bool,

    /// Number of strings to print, one per line.
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seed for a reproducible output.
    #[arg(long, env = "RANDSTR_SEED")]
    pub seed: Option<Seed>,

    #[arg(long, value_enum, env = "RANDSTR_LOG_LEVEL", default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,

    #[arg(long, value_enum, env = "RANDSTR_LOG_STYLE", default_value_t = TraceStyle::Compact)]
    pub log_style: TraceStyle,
}

/// # Errors
///
/// Will return an error if the alphabet is not valid or the output can't be
/// written.
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::setup(args.log_level, args.log_style);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    generate_command(&args, &mut out)
}

/// Writes `args.count` strings, one per line.
///
/// All the strings come from a single source, seeded once when a seed is
/// given.
///
/// # Errors
///
/// Will return an error if the alphabet is not valid or the output can't be
/// written.
pub fn generate_command<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let alphabet = match &args.alphabet {
        Some(chars) => Some(Alphabet::new(chars).with_context(|| format!("invalid alphabet: {chars:?}"))?),
        None => None,
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            info!("using seed: {seed}");
            source::seeded(seed)
        }
        None => source::fresh(),
    };

    for _ in 0..args.count {
        let line = match (&alphabet, args.lower, args.simple) {
            (Some(alphabet), _, _) => generator::from_alphabet_with(&mut rng, args.length, alphabet),
            (None, true, _) => generator::lower_alphanumeric_with(&mut rng, args.length),
            (None, false, true) => generator::simple_with(&mut rng, args.length),
            (None, false, false) => generator::safe_with(&mut rng, args.length),
        };

        writeln!(out, "{line}").context("failed to write the generated string")?;
    }

    Ok(())
}
