//! Error types for datatools-stats
//!
//! Every operation validates its input up front and reports a descriptive
//! error instead of producing NaN or dividing by zero.

use thiserror::Error;

/// Errors raised by the binning and aggregation functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// No samples where at least one is required
    #[error("{operation}: input contains no samples")]
    Empty { operation: &'static str },

    /// Value outside the domain of a log-scale operation
    #[error("{operation}: value {value} is not positive (logarithm undefined)")]
    NonPositive { operation: &'static str, value: f64 },

    /// NaN or infinite value where finite values are required
    #[error("{operation}: value {value} is not finite")]
    NonFinite { operation: &'static str, value: f64 },

    /// A bin count of zero was requested
    #[error("Number of bins must be at least 1")]
    InvalidBinCount,

    /// A range that cannot be cut into the requested bins at f64 precision
    #[error("Range [{min}, {max}] cannot be split into {num_bins} bins at f64 precision")]
    UnresolvableRange { min: f64, max: f64, num_bins: usize },

    /// Paired sequences of different lengths
    #[error("Length mismatch: {x} x-values, {y} y-values")]
    LengthMismatch { x: usize, y: usize },

    /// Constant input where a spread is required
    #[error("{operation}: input has zero variance")]
    ZeroVariance { operation: &'static str },
}

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Fail with `Empty` when `len` is zero
pub(crate) fn ensure_non_empty(operation: &'static str, len: usize) -> StatsResult<()> {
    if len == 0 {
        return Err(StatsError::Empty { operation });
    }
    Ok(())
}

/// Fail with `NonFinite` on the first NaN or infinite value
pub(crate) fn ensure_finite<'a>(
    operation: &'static str,
    values: impl IntoIterator<Item = &'a f64>,
) -> StatsResult<()> {
    match values.into_iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(StatsError::NonFinite { operation, value }),
        None => Ok(()),
    }
}

/// Fail with `NonPositive` on the first value <= 0
pub(crate) fn ensure_positive<'a>(
    operation: &'static str,
    values: impl IntoIterator<Item = &'a f64>,
) -> StatsResult<()> {
    match values.into_iter().find(|&&v| v <= 0.0) {
        Some(&value) => Err(StatsError::NonPositive { operation, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_empty() {
        assert!(ensure_non_empty("histogram", 3).is_ok());
        assert_eq!(
            ensure_non_empty("histogram", 0),
            Err(StatsError::Empty {
                operation: "histogram"
            })
        );
    }

    #[test]
    fn test_ensure_finite_reports_first_offender() {
        let data = [1.0, f64::INFINITY, f64::NAN];
        match ensure_finite("histogram", &data) {
            Err(StatsError::NonFinite { value, .. }) => assert!(value.is_infinite()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("log_histogram", &[0.5, 2.0]).is_ok());
        assert_eq!(
            ensure_positive("log_histogram", &[1.0, 0.0, -1.0]),
            Err(StatsError::NonPositive {
                operation: "log_histogram",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = StatsError::NonPositive {
            operation: "log_histogram",
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "log_histogram: value -2 is not positive (logarithm undefined)"
        );
        assert_eq!(
            StatsError::InvalidBinCount.to_string(),
            "Number of bins must be at least 1"
        );
        let err = StatsError::UnresolvableRange {
            min: 1.0,
            max: 1.5,
            num_bins: 4,
        };
        assert_eq!(
            err.to_string(),
            "Range [1, 1.5] cannot be split into 4 bins at f64 precision"
        );
    }
}
