//! Command-line interface definition and dispatch for recap.
//!
//! Uses [`clap`] for argument parsing with derive macros. The run loop is
//! load config, load export, condense, write.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::condense::{self, char_len};
use crate::config::Config;
use crate::export::{self, Source};
use crate::output::{self, Destination};
use crate::tokens;

/// Top-level CLI structure for recap.
///
/// The `///` doc comments on fields double as `--help` text rendered by clap.
#[derive(Parser, Debug)]
#[command(
    name = "recap",
    version,
    about = "Condense an AI chat export (JSON) into a short prompt for continuing the conversation"
)]
pub struct Cli {
    /// Path to exported chat JSON file, or '-' for stdin (default: stdin)
    pub input: Option<String>,
    /// Write condensed prompt to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Maximum length of the condensed prompt (default: 4000)
    #[arg(long, value_name = "N")]
    pub max_chars: Option<usize>,
    /// Paste the whole conversation instead of a condensed summary (ignores --max-chars)
    #[arg(long)]
    pub full: bool,
    /// Print the rendering tier, length and approximate token count to stderr
    #[arg(long)]
    pub stats: bool,
    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Runs one condensation as described by `cli`.
///
/// Every input problem is reported before anything is written.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let options = config.condense_options(cli.max_chars);

    if cli.print_config {
        let shown = toml::to_string_pretty(&Config::from(&options))?;
        print!("{}", shown);
        return Ok(());
    }

    let source = Source::from_arg(cli.input.as_deref());
    let messages = export::load(&source)?;
    let condensed = if cli.full {
        condense::full_context(&messages)
    } else {
        condense::condense(&messages, &options)
    };
    info!(
        messages = messages.len(),
        tier = %condensed.tier,
        chars = char_len(&condensed.text),
        "condensed transcript"
    );

    let destination = match cli.output {
        Some(path) => Destination::File(path),
        None => Destination::Stdout,
    };
    output::write_prompt(&condensed.text, &destination)?;

    if cli.stats {
        let token_count = tokens::count_tokens(&condensed.text)?;
        output::report_stats(condensed.tier, char_len(&condensed.text), token_count);
    }
    Ok(())
}
