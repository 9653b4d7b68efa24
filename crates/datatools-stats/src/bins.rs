//! Bin edges and bin counts
//!
//! A set of `k` bins is described by `k + 1` strictly increasing edges.
//! Bin `i` is the half-open interval `[edges[i], edges[i + 1])`, except the
//! last bin, which also contains its right edge.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Default number of bins for a sample of size `n`: `floor(sqrt(n)) + 1`
pub fn bin_count_heuristic(n: usize) -> usize {
    // f64 sqrt can land just below an exact root for large perfect squares.
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root + 1
}

/// Spacing of bin edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinScale {
    /// Equal-width bins
    #[default]
    Linear,
    /// Bins of equal width in log10 space
    Logarithmic,
}

impl BinScale {
    /// Build `num_bins + 1` edges spanning `[min, max]`
    ///
    /// The first and last edges are exactly `min` and `max`, so every value
    /// the range was computed from lies inside the edges. Logarithmic edges
    /// require `min > 0`; callers validate that.
    ///
    /// Fails with `UnresolvableRange` when the edges would not be strictly
    /// increasing with finite widths. That happens when `[min, max]` spans
    /// fewer representable floats than bins, or when a single bin would be
    /// wider than `f64::MAX`.
    pub fn edges(self, min: f64, max: f64, num_bins: usize) -> StatsResult<Vec<f64>> {
        let mut edges = match self {
            BinScale::Linear => linspace(min, max, num_bins + 1),
            BinScale::Logarithmic => linspace(min.log10(), max.log10(), num_bins + 1)
                .into_iter()
                .map(|e| 10f64.powf(e))
                .collect(),
        };
        if let Some(first) = edges.first_mut() {
            *first = min;
        }
        if let Some(last) = edges.last_mut() {
            *last = max;
        }
        let resolvable = edges.windows(2).all(|w| {
            let width = w[1] - w[0];
            width > 0.0 && width.is_finite()
        });
        if !resolvable {
            return Err(StatsError::UnresolvableRange { min, max, num_bins });
        }
        Ok(edges)
    }

    /// Widen a zero-length range `[v, v]` so that it has positive width
    ///
    /// Linear ranges become `[v - 0.5, v + 0.5]`; logarithmic ranges gain
    /// half a decade on each side.
    pub fn widen(self, value: f64) -> (f64, f64) {
        match self {
            BinScale::Linear => (value - 0.5, value + 0.5),
            BinScale::Logarithmic => {
                let factor = 10f64.sqrt();
                (value / factor, value * factor)
            }
        }
    }
}

/// `num` evenly spaced values from `start` to `stop` inclusive
///
/// Finite endpoints always give finite values, even when `stop - start`
/// exceeds `f64::MAX`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let intervals = (num - 1) as f64;
            let span = stop - start;
            let mut values: Vec<f64> = if span.is_finite() {
                let step = span / intervals;
                (0..num).map(|i| start + i as f64 * step).collect()
            } else {
                // Span overflows only when the endpoints have opposite signs,
                // so neither weighted term can.
                (0..num)
                    .map(|i| {
                        let t = i as f64 / intervals;
                        start * (1.0 - t) + stop * t
                    })
                    .collect()
            };
            values[num - 1] = stop;
            values
        }
    }
}

/// Arithmetic midpoints of consecutive edges
pub fn centers(edges: &[f64]) -> Vec<f64> {
    // Halving first keeps the sum finite for edges near ±f64::MAX
    edges.windows(2).map(|w| 0.5 * w[0] + 0.5 * w[1]).collect()
}

/// Widths of consecutive edges
pub fn widths(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Index of the bin containing `x`
///
/// Values on an interior edge belong to the bin on their right. Values at or
/// beyond the last edge are clamped into the last bin, values below the
/// first edge into the first.
pub fn bin_index(edges: &[f64], x: f64) -> usize {
    let num_bins = edges.len().saturating_sub(1);
    if num_bins == 0 {
        return 0;
    }
    let at_or_below = edges.partition_point(|&e| e <= x);
    at_or_below.saturating_sub(1).min(num_bins - 1)
}

/// Minimum and maximum of a non-empty slice
pub(crate) fn min_max(data: &[f64]) -> (f64, f64) {
    data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
