//! Summary statistics and correlation
//!
//! Provides common statistical summaries:
//! - Mean, variance, standard deviation (population, ddof = 0)
//! - Min, max, median
//! - Pearson correlation of paired samples

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::average::zip_pairs;
use crate::error::{ensure_finite, ensure_non_empty, StatsError, StatsResult};

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Median (50th percentile)
    pub median: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        ensure_non_empty("summary", data.len())?;
        ensure_finite("summary", data)?;

        let count = data.len();
        let mean = data.iter().sum::<f64>() / count as f64;
        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Ok(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            variance,
            std_dev: variance.sqrt(),
            median,
        })
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty("mean", data.len())?;
    ensure_finite("mean", data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population standard deviation
pub fn std_dev(data: &[f64]) -> StatsResult<f64> {
    ensure_non_empty("std_dev", data.len())?;
    ensure_finite("std_dev", data)?;
    let mean = mean(data)?;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    Ok(variance.sqrt())
}

/// Pearson correlation coefficient of two equal-length samples
pub fn corrcoef(xs: &[f64], ys: &[f64]) -> StatsResult<f64> {
    corrcoef_pairs(&zip_pairs(xs, ys)?)
}

/// Pearson correlation coefficient of `(x, y)` pairs
///
/// Fails with `ZeroVariance` when either coordinate is constant.
pub fn corrcoef_pairs(pairs: &[(f64, f64)]) -> StatsResult<f64> {
    const OPERATION: &str = "corrcoef";
    ensure_non_empty(OPERATION, pairs.len())?;
    ensure_finite(OPERATION, pairs.iter().flat_map(|(x, y)| [x, y]))?;

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::ZeroVariance {
            operation: OPERATION,
        });
    }

    // Rounding can push |r| a hair past 1
    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    debug!(pairs = pairs.len(), r, "computed correlation");
    Ok(r)
}
