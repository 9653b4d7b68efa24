//! logbin - histogram of standard input over logarithmically spaced bins

use std::io;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use datatools_cli::{emit, read_values, run, stdout, OutputArgs};
use datatools_stats::log_histogram;

/// Compute the histogram of the data received from STDIN using
/// logarithmically spaced bins. Every value must be positive. Prints one
/// `<bin center> <density>` line per bin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of bins; estimated from the number of data points if omitted
    num_bins: Option<NonZeroUsize>,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run("logbin", || {
        let data = read_values(io::stdin().lock())?;
        let hist = log_histogram(&data, args.num_bins.map(NonZeroUsize::get))?;
        emit(&mut stdout(), args.output, &hist, hist.rows())
    })
}
