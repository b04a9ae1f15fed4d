// Error taxonomy for timing comparisons
//
// Invalid inputs are rejected before any arithmetic runs; the only
// computation error is the 0/0 t-statistic when neither group varies.

use thiserror::Error;

/// Errors from validating comparison inputs or computing the test
#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Cannot compare empty sample groups")]
    EmptyGroup,

    #[error("Need at least 2 measurements per group for a t-test, got {count}")]
    InsufficientSamples { count: u64 },

    #[error("Standard deviation must be non-negative, got {stdev}")]
    NegativeStdev { stdev: f64 },

    #[error("t-statistic is undefined: both groups have zero variance")]
    ZeroVariance,

    #[error("t-distribution rejected df={df}: {source}")]
    Distribution {
        df: f64,
        source: statrs::StatsError,
    },
}

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, ComparisonError>;
