//! Shared plumbing for the command-line entry points.
//!
//! Each binary parses its arguments, runs one operation, and maps any error to
//! a message on stderr plus exit status 1.

pub mod config;
pub mod generate;
pub mod install;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV_VAR: &str = "COMMIT_MSG_LOG";

/// Install a stderr logger filtered by `COMMIT_MSG_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

/// Parse arguments, turning usage errors into exit status 1.
///
/// `--help` and `--version` print to stdout and exit 0.
pub fn parse_args<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Print an error with its cause chain and return exit status 1.
pub fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");
    ExitCode::FAILURE
}
