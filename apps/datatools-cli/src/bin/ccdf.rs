//! ccdf - empirical complementary cumulative distribution of standard input

use std::io;
use std::process::ExitCode;

use clap::Parser;
use datatools_cli::{emit, read_values, run, stdout, OutputArgs};
use datatools_stats::empirical_ccdf;

/// Compute the empirical CCDF of the data received from STDIN. Prints one
/// `<value> <Pr(X > value)>` line per data point, ascending.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run("ccdf", || {
        let data = read_values(io::stdin().lock())?;
        let dist = empirical_ccdf(&data)?;
        emit(&mut stdout(), args.output, &dist, dist.rows())
    })
}
