//! datatools-stats - Binning and aggregation for exploratory data analysis
//!
//! This crate provides the numeric core behind the datatools command-line
//! tools:
//!
//! - **Histograms**: density histograms over linear or log-spaced bins
//! - **Binned averages**: mean of y within bins of x, or per distinct x
//! - **ECDF / CCDF**: rank-based distribution functions
//! - **Value counts**: frequency tables over any ordered value type
//! - **Summary**: mean, standard deviation, Pearson correlation
//!
//! Every function is pure and validates its input up front: empty samples,
//! non-positive values on log scales and NaN are reported as
//! [`StatsError`] rather than propagated as NaN or infinity.

pub mod average;
pub mod bins;
pub mod counts;
pub mod ecdf;
pub mod error;
pub mod histogram;
pub mod options;
pub mod summary;

pub use average::*;
pub use bins::{bin_count_heuristic, BinScale};
pub use counts::*;
pub use ecdf::*;
pub use error::{StatsError, StatsResult};
pub use histogram::*;
pub use options::*;
pub use summary::*;
