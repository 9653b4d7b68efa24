//! count - frequency of each distinct value on standard input

use std::io;
use std::process::ExitCode;

use clap::Parser;
use datatools_cli::{emit, read_values, run, stdout, OutputArgs};
use datatools_stats::value_counts_f64;

/// Count how many times each distinct value occurs in the data received
/// from STDIN. Prints one `<value> <count>` line per value, ascending.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run("count", || {
        let data = read_values(io::stdin().lock())?;
        let table = value_counts_f64(&data)?;
        emit(&mut stdout(), args.output, &table, table.rows())
    })
}
