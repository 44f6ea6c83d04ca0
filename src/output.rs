//! Writing the prompt and reporting to the terminal.
//!
//! The prompt goes to stdout or a file. Diagnostics and `--stats` go to
//! stderr so they never mix with a piped prompt.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::condense::Tier;
use crate::tokens::format_number;

/// Where the finished prompt is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Printed with a trailing newline.
    Stdout,
    /// Written verbatim, no trailing newline added.
    File(PathBuf),
}

pub fn write_prompt(prompt: &str, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => println!("{}", prompt),
        Destination::File(path) => std::fs::write(path, prompt)
            .with_context(|| format!("Failed to write prompt to {:?}", path))?,
    }
    Ok(())
}

/// Prints a one-line summary such as `[rich · 1,234 chars · ~310 tokens]`.
pub fn report_stats(tier: Tier, chars: usize, tokens: usize) {
    eprintln!(
        "{}",
        format!(
            "[{} · {} chars · ~{} tokens]",
            tier,
            format_number(chars),
            format_number(tokens)
        )
        .dimmed()
    );
}

/// Prints an error and its causes on a single line.
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);
}
