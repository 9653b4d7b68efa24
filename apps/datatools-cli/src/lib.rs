//! datatools-cli - shared plumbing for the datatools command-line tools
//!
//! Each tool reads numbers from standard input, hands them to
//! `datatools-stats`, and prints one result row per line. This crate holds
//! the pieces they share: input parsing, output formatting, logging setup
//! and the exit-code convention.

pub mod error;
pub mod input;
pub mod output;

use std::io::{self, BufWriter, StdoutLock};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

pub use error::{CliError, CliResult};
pub use input::{read_pairs, read_values};
pub use output::{emit, write_json, write_rows, OutputArgs};

/// Log to standard error, filtered by `RUST_LOG` (default `warn`)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Buffered standard output
pub fn stdout() -> BufWriter<StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}

/// Run a tool body, report any error on standard error, and map it to an
/// exit status
pub fn run(tool: &str, body: impl FnOnce() -> CliResult<()>) -> ExitCode {
    init_logging();
    match body() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(tool, error = ?err, "tool failed");
            eprintln!("{}: {}", tool, err);
            ExitCode::FAILURE
        }
    }
}
