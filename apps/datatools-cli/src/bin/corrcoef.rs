//! corrcoef - Pearson correlation of `x y` pairs on standard input

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use datatools_cli::{read_pairs, run, stdout, write_json, OutputArgs};
use datatools_stats::corrcoef_pairs;

/// Compute the Pearson correlation coefficient of the `x y` pairs received
/// from STDIN.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run("corrcoef", || {
        let pairs = read_pairs(io::stdin().lock())?;
        let r = corrcoef_pairs(&pairs)?;
        let mut out = stdout();
        if args.output.json {
            write_json(&mut out, &r)
        } else {
            writeln!(out, "{}", r)?;
            out.flush()?;
            Ok(())
        }
    })
}
