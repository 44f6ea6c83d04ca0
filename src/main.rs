//! Entry point for recap, which condenses an exported AI chat into a prompt
//! for continuing the conversation elsewhere.
//!
//! This binary loads environment variables, sets up logging, parses CLI
//! arguments via [`cli`], and maps any failure to exit code 1.

mod cli;
mod condense;
mod config;
mod constants;
mod export;
mod logging;
mod message;
mod output;
mod tokens;

use std::process::ExitCode;

/// Runs the recap CLI.
///
/// Loads `.env` files (silently ignored if absent) so `RECAP_LOG` can be set
/// per project, then parses arguments and runs a single condensation.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();
    let cli = cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
