//! Frequency tables
//!
//! Counts how often each distinct value occurs. Works for any ordered value
//! type; floats, which are not `Ord`, go through [`value_counts_f64`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StatsError, StatsResult};

/// Distinct values in ascending order with their occurrence counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCounts<T> {
    values: Vec<T>,
    counts: Vec<usize>,
}

impl<T> ValueCounts<T> {
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of samples counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(value, count)` rows in ascending value order
    pub fn rows(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.values.iter().zip(self.counts.iter().copied())
    }

    /// Split into `(values, counts)`
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>) {
        (self.values, self.counts)
    }
}

/// Count occurrences of each distinct value
///
/// Empty input yields an empty table.
pub fn value_counts<T: Ord + Clone>(data: &[T]) -> ValueCounts<T> {
    let mut table: BTreeMap<&T, usize> = BTreeMap::new();
    for value in data {
        *table.entry(value).or_insert(0) += 1;
    }
    let (values, counts) = table
        .into_iter()
        .map(|(value, count)| (value.clone(), count))
        .unzip();
    debug!(samples = data.len(), "counted values");
    ValueCounts { values, counts }
}

/// Count occurrences of each distinct float
///
/// Values are grouped by `==`, so `-0.0` and `0.0` are one value. NaN has no
/// place in the ordering and is rejected.
pub fn value_counts_f64(data: &[f64]) -> StatsResult<ValueCounts<f64>> {
    if let Some(&value) = data.iter().find(|v| v.is_nan()) {
        return Err(StatsError::NonFinite {
            operation: "value_counts",
            value,
        });
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (values, counts) = sorted
        .chunk_by(|a, b| a == b)
        .map(|group| (group[0], group.len()))
        .unzip();
    debug!(samples = data.len(), "counted float values");
    Ok(ValueCounts { values, counts })
}
