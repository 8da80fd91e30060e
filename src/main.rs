//! Snipgraph - duplicate detection and relationship graphs for a personal
//! snippet store
//!
//! Reads a JSON snapshot of the collection, flags near-duplicates of new
//! text and links related items by shared keywords and tags.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use snipgraph_core::error::{ExitCode as SnipExitCode, SnipError};
use snipgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_code(SnipExitCode::Success),
        Err(e) => report(&cli, &e),
    }
}

/// Parse arguments; a failure under `--format json` is reported as a JSON
/// envelope because `Cli.format` is not available yet
fn parse_cli() -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse() {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !json_requested(env::args().skip(1))
    {
        err.exit();
    }

    let error = parse_error(&err);
    eprintln!("{}", error.to_json());
    Err(exit_code(error.exit_code()))
}

fn parse_error(err: &clap::Error) -> SnipError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand => SnipError::UsageError(err.to_string()),
        _ => SnipError::Other(err.to_string()),
    }
}

/// Whether the raw arguments ask for JSON output
fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.as_deref() == Some("json") {
            return true;
        }
    }
    false
}

fn report(cli: &Cli, err: &SnipError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", err),
    }
    exit_code(err.exit_code())
}

fn exit_code(code: SnipExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
