//! Error types for the datatools command-line tools

use datatools_stats::StatsError;
use thiserror::Error;

/// Errors raised while reading input or writing results
#[derive(Debug, Error)]
pub enum CliError {
    /// Token on standard input that is not a number
    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    /// Paired input with a dangling x value
    #[error("expected x y pairs, got an odd number of values ({tokens})")]
    OddPairCount { tokens: usize },

    /// Failure in the numeric library
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the command-line tools
pub type CliResult<T> = Result<T, CliError>;
