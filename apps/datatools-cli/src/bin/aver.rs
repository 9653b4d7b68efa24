//! aver - average y within bins of x, for `x y` pairs on standard input

use std::io;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use datatools_cli::{emit, read_pairs, run, stdout, OutputArgs};
use datatools_stats::{bin_average, BinningOptions};

/// Average the y values of `x y` pairs received from STDIN within bins of
/// x. Prints one `<x> <mean y>` line per non-empty bin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of bins; estimated from the number of pairs if omitted
    num_bins: Option<NonZeroUsize>,

    /// Use logarithmically spaced bins (x must be positive)
    #[arg(short, long)]
    log: bool,

    /// Average over each distinct x value instead of over bins
    #[arg(short, long, conflicts_with_all = ["log", "num_bins"])]
    unique: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl Args {
    fn binning(&self) -> BinningOptions {
        BinningOptions {
            num_bins: self.num_bins.map(NonZeroUsize::get),
            logarithmic: self.log,
            unique: self.unique,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    run("aver", || {
        let pairs = read_pairs(io::stdin().lock())?;
        let average = bin_average(&pairs, &args.binning())?;
        emit(&mut stdout(), args.output, &average, average.rows())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_binning_from_flags() {
        let args = Args::try_parse_from(["aver", "-l", "8"]).unwrap();
        assert_eq!(
            args.binning(),
            BinningOptions {
                num_bins: Some(8),
                logarithmic: true,
                unique: false,
            }
        );

        let args = Args::try_parse_from(["aver", "--unique"]).unwrap();
        assert_eq!(args.binning(), BinningOptions::new().unique(true));
    }

    #[test]
    fn test_unique_conflicts() {
        for argv in [["aver", "-u", "5"], ["aver", "-u", "-l"]] {
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
            assert_ne!(err.exit_code(), 0);
        }
    }
}
