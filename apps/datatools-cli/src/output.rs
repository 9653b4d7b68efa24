//! Writing results to standard output
//!
//! The default format is one row per line, two columns separated by a
//! single space. `--json` writes the full result type instead.

use std::fmt::Display;
use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::error::CliResult;

/// Output flags shared by every tool
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    /// Print the result as JSON instead of two columns
    #[arg(long)]
    pub json: bool,
}

/// Write `a b` lines
pub fn write_rows<W, A, B, I>(out: &mut W, rows: I) -> CliResult<()>
where
    W: Write,
    A: Display,
    B: Display,
    I: IntoIterator<Item = (A, B)>,
{
    for (a, b) in rows {
        writeln!(out, "{} {}", a, b)?;
    }
    out.flush()?;
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write either JSON or two-column rows, per `args`
pub fn emit<W, T, A, B, I>(out: &mut W, args: OutputArgs, value: &T, rows: I) -> CliResult<()>
where
    W: Write,
    T: Serialize + ?Sized,
    A: Display,
    B: Display,
    I: IntoIterator<Item = (A, B)>,
{
    if args.json {
        write_json(out, value)
    } else {
        write_rows(out, rows)
    }
}
