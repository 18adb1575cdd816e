//! Graphwalk - step-by-step graph traversal CLI
//!
//! Builds an adjacency-list graph from flags, a TOML file or a preset,
//! prints it, and replays depth-first or breadth-first traversals one
//! visited vertex at a time.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphwalkError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `cli.format` exists, so JSON is detected from argv
            if !requests_json(env::args().skip(1)) {
                err.exit();
            }
            let Some(error) = parse_failure(&err) else {
                err.exit();
            };
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => GraphwalkExitCode::Success,
        Err(e) => {
            report(&cli, &e);
            e.exit_code()
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), code = code as i32, "exit");
    ExitCode::from(code as u8)
}

/// Print a command error on stderr in the shape the output format asks for.
fn report(cli: &Cli, error: &GraphwalkError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet || matches!(error, GraphwalkError::Interrupted { .. }) {
        // an interrupted run always says so, even when quiet
        eprintln!("error: {}", error);
    }
}

/// Map a clap failure to a graphwalk error; `None` for help and version.
fn parse_failure(err: &clap::Error) -> Option<GraphwalkError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => Some(GraphwalkError::UsageError(err.to_string())),
        _ => Some(GraphwalkError::Other(err.to_string())),
    }
}

/// Whether raw arguments select `--format json`.
fn requests_json<I>(args: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format" => {
                if args.next().is_some_and(|v| v.as_ref() == "json") {
                    return true;
                }
            }
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}
