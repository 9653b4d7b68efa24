//! Reading numbers from standard input
//!
//! Input is free-form: any mix of spaces, tabs and newlines separates
//! values. Paired input is consumed two values at a time.

use std::io::BufRead;

use tracing::debug;

use crate::error::{CliError, CliResult};

/// Read every whitespace-separated number until end of input
pub fn read_values<R: BufRead>(reader: R) -> CliResult<Vec<f64>> {
    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| CliError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }
    debug!(values = values.len(), "read input");
    Ok(values)
}

/// Read `x y` pairs until end of input
pub fn read_pairs<R: BufRead>(reader: R) -> CliResult<Vec<(f64, f64)>> {
    let values = read_values(reader)?;
    if values.len() % 2 != 0 {
        return Err(CliError::OddPairCount {
            tokens: values.len(),
        });
    }
    Ok(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}
