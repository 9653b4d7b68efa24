//! Binned averages of paired samples
//!
//! Reduces a scatter of `(x, y)` pairs to the mean of `y` within each
//! x-bin, or within each distinct x value in unique mode.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bins;
use crate::error::{
    ensure_finite, ensure_non_empty, ensure_positive, StatsError, StatsResult,
};
use crate::options::BinningOptions;

const OPERATION: &str = "bin_average";

/// Mean of `y` per bin (or per distinct `x`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedAverage {
    /// Bin centers, or the distinct x values in unique mode
    xs: Vec<f64>,
    /// Mean y of each output
    ys: Vec<f64>,
    /// Number of pairs averaged into each output
    counts: Vec<usize>,
}

impl BinnedAverage {
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `(x, mean y)` rows in ascending x order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Split into `(xs, ys)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, x: f64, accumulator: &Accumulator) {
        self.xs.push(x);
        self.ys.push(accumulator.mean());
        self.counts.push(accumulator.count);
    }
}

/// Running sum of y values in the open bin
#[derive(Debug, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, y: f64) {
        self.sum += y;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Zip separate x and y sequences into pairs
pub fn zip_pairs(xs: &[f64], ys: &[f64]) -> StatsResult<Vec<(f64, f64)>> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
}

/// Average `y` over bins of `x`
///
/// With `options.unique` set, pairs are grouped by exact x value and the
/// bin count and spacing are ignored. Otherwise pairs are sorted by x and
/// walked once against `num_bins` edges spanning `[min x, max x]`, linear or
/// log-spaced. Bins that receive no pairs are skipped, so the result can hold
/// fewer entries than bins. An x beyond the last edge (rounding at the
/// boundary) is counted in the last bin.
pub fn bin_average(pairs: &[(f64, f64)], options: &BinningOptions) -> StatsResult<BinnedAverage> {
    ensure_non_empty(OPERATION, pairs.len())?;
    ensure_finite(OPERATION, pairs.iter().flat_map(|(x, y)| [x, y]))?;

    let mut sorted = pairs.to_vec();
    sorted.sort_by(compare_pairs);

    if options.unique {
        Ok(average_unique(&sorted))
    } else {
        average_binned(&sorted, options)
    }
}

/// Average `y` over bins of `x`, taking x and y as separate sequences
pub fn bin_average_xy(
    xs: &[f64],
    ys: &[f64],
    options: &BinningOptions,
) -> StatsResult<BinnedAverage> {
    bin_average(&zip_pairs(xs, ys)?, options)
}

fn average_unique(sorted: &[(f64, f64)]) -> BinnedAverage {
    let mut result = BinnedAverage::with_capacity(sorted.len());
    // `==` merges -0.0 and 0.0, which sort next to each other
    for group in sorted.chunk_by(|a, b| a.0 == b.0) {
        let mut accumulator = Accumulator::default();
        for &(_, y) in group {
            accumulator.add(y);
        }
        result.push(group[0].0, &accumulator);
    }
    debug!(
        pairs = sorted.len(),
        distinct = result.len(),
        "averaged by unique x"
    );
    result
}

fn average_binned(sorted: &[(f64, f64)], options: &BinningOptions) -> StatsResult<BinnedAverage> {
    let scale = options.scale();
    let xs = sorted.iter().map(|(x, _)| x);
    if options.logarithmic {
        ensure_positive(OPERATION, xs)?;
    }
    let num_bins = options.resolve_num_bins(sorted.len())?;

    let min = sorted[0].0;
    let max = sorted[sorted.len() - 1].0;
    if min == max {
        debug!(x = min, "zero-width x range, single output");
        let mut accumulator = Accumulator::default();
        for &(_, y) in sorted {
            accumulator.add(y);
        }
        let mut result = BinnedAverage::with_capacity(1);
        result.push(min, &accumulator);
        return Ok(result);
    }

    let edges = scale.edges(min, max, num_bins)?;
    let centers = bins::centers(&edges);
    let last = num_bins - 1;

    let mut result = BinnedAverage::with_capacity(num_bins);
    let mut bin = 0;
    let mut accumulator = Accumulator::default();

    for &(x, y) in sorted {
        while x > edges[bin + 1] && bin < last {
            if !accumulator.is_empty() {
                result.push(centers[bin], &accumulator);
            }
            accumulator = Accumulator::default();
            bin += 1;
        }
        if x > edges[bin + 1] {
            trace!(x, edge = edges[bin + 1], "clamping x into last bin");
        }
        accumulator.add(y);
    }
    result.push(centers[bin], &accumulator);

    debug!(
        pairs = sorted.len(),
        num_bins,
        outputs = result.len(),
        logarithmic = options.logarithmic,
        "averaged over bins"
    );
    Ok(result)
}

/// Total order on pairs: by x, then by y
fn compare_pairs(a: &(f64, f64), b: &(f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}
