// Statistical significance testing for benchmark timing comparisons
//
// Welch's two-sample t-test with the Welch-Satterthwaite degrees-of-freedom
// approximation. Both entry points (raw samples, summary statistics) reduce
// to the same kernel, so their results agree bit-for-bit.
//
// Scientific Foundation:
// [1] Welch, B. L. (1947). The generalization of "Student's" problem when
//     several different population variances are involved. Biometrika 34.
// [2] Satterthwaite, F. E. (1946). An approximate distribution of estimates
//     of variance components. Biometrics Bulletin 2.
//
// Implementation:
// - Uses statrs (crates.io) for the Student's t CDF
// - NO custom CDF implementation - only the statistic and degrees of
//   freedom are computed here, as plain arithmetic

mod error;
mod report;
mod statistics;
mod summary;

pub use error::{ComparisonError, Result};
pub use report::{assess, Assessment, DEFAULT_ALPHA, Verdict};
pub use statistics::{compare_samples, compare_summaries, WelchTTest};
pub use summary::GroupSummary;
