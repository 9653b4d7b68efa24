//! Binning options
//!
//! Options shared by the histogram and averaging functions. They can be
//! built in code, or loaded from JSON (and TOML with the `toml-config`
//! feature) so that a saved analysis can be replayed with the same bins.

use serde::{Deserialize, Serialize};

use crate::bins::{bin_count_heuristic, BinScale};
use crate::error::{StatsError, StatsResult};

/// How samples are grouped into bins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningOptions {
    /// Number of bins; `None` uses [`bin_count_heuristic`] on the sample size
    pub num_bins: Option<usize>,
    /// Log-spaced bins instead of equal-width bins
    pub logarithmic: bool,
    /// Group by exact x value instead of by bin (averaging only)
    pub unique: bool,
}

impl BinningOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = Some(num_bins);
        self
    }

    pub fn logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Spacing implied by the `logarithmic` flag
    pub fn scale(&self) -> BinScale {
        if self.logarithmic {
            BinScale::Logarithmic
        } else {
            BinScale::Linear
        }
    }

    /// Number of bins to use for `sample_size` samples
    pub fn resolve_num_bins(&self, sample_size: usize) -> StatsResult<usize> {
        self.validate()?;
        Ok(self
            .num_bins
            .unwrap_or_else(|| bin_count_heuristic(sample_size)))
    }

    /// Validate option values
    pub fn validate(&self) -> StatsResult<()> {
        if self.num_bins == Some(0) {
            return Err(StatsError::InvalidBinCount);
        }
        Ok(())
    }

    /// Load options from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize options to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load options from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize options to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
