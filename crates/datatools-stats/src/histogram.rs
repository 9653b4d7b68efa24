//! Density histograms over linear or logarithmic bins
//!
//! Densities are normalized so that `sum(density[i] * width[i]) == 1`.
//! Bins span the data's own range, so every sample is counted.
//!
//! # Degenerate input
//!
//! When every sample has the same value `v` the range has zero width. The
//! range is then widened (to `[v - 0.5, v + 0.5]` for linear bins, half a
//! decade each side for log bins) and the requested number of bins is kept.
//! All of the mass lands in the bin containing `v`.
//!
//! # Unresolvable ranges
//!
//! A range spanning fewer representable floats than bins has no strictly
//! increasing set of edges, and a bin wider than `f64::MAX` or narrow enough
//! to overflow its density has no finite one. Both fail with
//! `UnresolvableRange` instead of producing NaN or infinite densities.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bins::{self, BinScale};
use crate::error::{ensure_finite, ensure_non_empty, ensure_positive, StatsError, StatsResult};
use crate::options::BinningOptions;

/// A density-normalized histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges (one more than the number of bins)
    edges: Vec<f64>,
    /// Midpoint of each bin
    centers: Vec<f64>,
    /// Number of samples in each bin
    counts: Vec<usize>,
    /// Probability density in each bin
    densities: Vec<f64>,
}

impl Histogram {
    /// Build a histogram with the spacing and bin count from `options`
    pub fn from_data(data: &[f64], options: &BinningOptions) -> StatsResult<Self> {
        let operation = match options.scale() {
            BinScale::Linear => "histogram",
            BinScale::Logarithmic => "log_histogram",
        };
        ensure_non_empty(operation, data.len())?;
        ensure_finite(operation, data)?;
        if options.scale() == BinScale::Logarithmic {
            ensure_positive(operation, data)?;
        }
        let num_bins = options.resolve_num_bins(data.len())?;

        let (mut min, mut max) = bins::min_max(data);
        if min == max {
            debug!(value = min, "zero-width range, widening");
            (min, max) = options.scale().widen(min);
        }
        let edges = options.scale().edges(min, max, num_bins)?;

        let mut counts = vec![0usize; num_bins];
        for &x in data {
            counts[bins::bin_index(&edges, x)] += 1;
        }

        let total = data.len() as f64;
        let densities: Vec<f64> = counts
            .iter()
            .zip(bins::widths(&edges))
            // total * width can overflow when a bin is close to f64::MAX wide
            .map(|(&count, width)| count as f64 / total / width)
            .collect();
        // Subnormal widths can push a density past f64::MAX
        if densities.iter().any(|d| !d.is_finite()) {
            return Err(StatsError::UnresolvableRange { min, max, num_bins });
        }

        debug!(
            operation,
            samples = data.len(),
            num_bins,
            min,
            max,
            "built histogram"
        );

        Ok(Self {
            centers: bins::centers(&edges),
            edges,
            counts,
            densities,
        })
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when there are no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Width of each bin
    pub fn widths(&self) -> Vec<f64> {
        bins::widths(&self.edges)
    }

    /// Total number of samples counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(center, density)` rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.centers
            .iter()
            .copied()
            .zip(self.densities.iter().copied())
    }

    /// Split into `(centers, densities)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.centers, self.densities)
    }
}

/// Density histogram over equal-width bins
///
/// `num_bins` defaults to [`bin_count_heuristic`](crate::bin_count_heuristic)
/// of the sample size. When every value equals `v`, the range is widened to
/// `[v - 0.5, v + 0.5]` and still split into `num_bins` bins. A range too
/// narrow to hold `num_bins` distinct edges fails with `UnresolvableRange`.
pub fn histogram(data: &[f64], num_bins: Option<usize>) -> StatsResult<Histogram> {
    let options = BinningOptions {
        num_bins,
        ..BinningOptions::default()
    };
    Histogram::from_data(data, &options)
}

/// Density histogram over log-spaced bins
///
/// Edges are `10^linspace(log10(min), log10(max), num_bins + 1)`; centers
/// are arithmetic midpoints of each edge pair. Every value must be positive.
/// When every value equals `v`, the range is widened to
/// `[v / sqrt(10), v * sqrt(10)]` and still split into `num_bins` bins.
pub fn log_histogram(data: &[f64], num_bins: Option<usize>) -> StatsResult<Histogram> {
    let options = BinningOptions {
        num_bins,
        logarithmic: true,
        ..BinningOptions::default()
    };
    Histogram::from_data(data, &options)
}
