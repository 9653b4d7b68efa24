//! Empirical Cumulative Distribution Function (ECDF)
//!
//! For a sample of n values sorted ascending, the i-th value (1-indexed)
//! has CDF i/n and complementary CDF 1 - i/n. No binning is involved.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_non_empty, StatsError, StatsResult};

/// Sorted sample values paired with a probability for each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    values: Vec<f64>,
    probabilities: Vec<f64>,
}

impl Distribution {
    /// Sorted sample values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// CDF or CCDF value at each sorted sample
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(value, probability)` rows in ascending value order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }

    /// Split into `(values, probabilities)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.values, self.probabilities)
    }
}

/// Sort a sample ascending, rejecting empty input and NaN
fn sorted_sample(operation: &'static str, data: &[f64]) -> StatsResult<Vec<f64>> {
    ensure_non_empty(operation, data.len())?;
    if let Some(&value) = data.iter().find(|v| v.is_nan()) {
        return Err(StatsError::NonFinite { operation, value });
    }
    let mut values = data.to_vec();
    values.sort_by(f64::total_cmp);
    Ok(values)
}

/// Empirical CDF: the i-th smallest value maps to i/n
///
/// The last probability is exactly 1.0.
pub fn empirical_cdf(data: &[f64]) -> StatsResult<Distribution> {
    let values = sorted_sample("empirical_cdf", data)?;
    let n = values.len() as f64;
    let probabilities = (1..=values.len()).map(|i| i as f64 / n).collect();
    debug!(samples = values.len(), "computed empirical CDF");
    Ok(Distribution {
        values,
        probabilities,
    })
}

/// Empirical complementary CDF: the i-th smallest value maps to 1 - i/n
///
/// The last probability is exactly 0.0.
pub fn empirical_ccdf(data: &[f64]) -> StatsResult<Distribution> {
    let values = sorted_sample("empirical_ccdf", data)?;
    let n = values.len() as f64;
    let probabilities = (1..=values.len()).map(|i| 1.0 - i as f64 / n).collect();
    debug!(samples = values.len(), "computed empirical CCDF");
    Ok(Distribution {
        values,
        probabilities,
    })
}

/// Empirical Cumulative Distribution Function with point queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecdf {
    /// Sorted values
    values: Vec<f64>,
    /// CDF values (0 to 1] at each point
    cdf: Vec<f64>,
}

impl Ecdf {
    /// Build an ECDF from data
    ///
    /// Time complexity: O(n log n) for sorting
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        let (values, cdf) = empirical_cdf(data)?.into_parts();
        Ok(Self { values, cdf })
    }

    /// Proportion of values <= x
    ///
    /// Time complexity: O(log n)
    pub fn evaluate(&self, x: f64) -> f64 {
        let at_or_below = self.values.partition_point(|&v| v <= x);
        match at_or_below {
            0 => 0.0,
            k => self.cdf[k - 1],
        }
    }

    /// Smallest value v such that ECDF(v) >= p
    ///
    /// Returns `None` for p outside [0, 1].
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        let idx = self.cdf.partition_point(|&c| c < p);
        self.values
            .get(idx)
            .or_else(|| self.values.last())
            .copied()
    }

    /// Get the median
    pub fn median(&self) -> Option<f64> {
        self.quantile(0.5)
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the sorted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the CDF values
    pub fn cdf_values(&self) -> &[f64] {
        &self.cdf
    }
}
