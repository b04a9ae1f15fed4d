// Welch's t-test kernel
//
// The statistic and the Welch-Satterthwaite degrees of freedom are plain
// arithmetic; the two-tailed p-value delegates to statrs' Student's t CDF.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::significance::error::{ComparisonError, Result};
use crate::significance::summary::GroupSummary;

/// Result of a Welch's t-test between two measurement groups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTTest {
    /// t-statistic value
    pub statistic: f64,

    /// p-value (two-tailed) - probability of a difference at least this
    /// extreme under the null hypothesis of equal means
    /// - p < alpha: statistically significant
    /// - p >= alpha: not significant (noise/random variation)
    pub pvalue: f64,

    /// Welch-Satterthwaite degrees of freedom (possibly non-integer)
    pub df: f64,

    /// Mean of group A
    pub mean_a: f64,

    /// Mean of group B
    pub mean_b: f64,

    /// Sample variance of group A
    pub variance_a: f64,

    /// Sample variance of group B
    pub variance_b: f64,
}

impl WelchTTest {
    /// Whether the p-value clears the given significance level
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// Compare two groups of raw timing measurements using Welch's t-test
///
/// Derives mean, sample standard deviation, and count for each group, then
/// delegates to [`compare_summaries`] - feeding the derived summaries in
/// directly produces the identical result.
///
/// # Arguments
/// * `a` - Measurements for group A (at least 2)
/// * `b` - Measurements for group B (at least 2)
///
/// # Example
/// ```
/// use significa::significance::compare_samples;
///
/// let baseline = vec![10.0, 12.0, 11.0, 13.0, 10.0];
/// let current = vec![25.0, 27.0, 26.0, 28.0, 25.0];
///
/// let test = compare_samples(&baseline, &current).unwrap();
/// assert!(test.pvalue < 0.05); // Clearly different
/// ```
pub fn compare_samples(a: &[f64], b: &[f64]) -> Result<WelchTTest> {
    let summary_a = GroupSummary::from_samples(a)?;
    let summary_b = GroupSummary::from_samples(b)?;
    compare_summaries(&summary_a, &summary_b)
}

/// Compare two groups given only their summary statistics
///
/// Computes
///
/// ```text
/// t  = (mean_a - mean_b) / sqrt(var_a/n_a + var_b/n_b)
/// df = (var_a/n_a + var_b/n_b)^2
///      / ((var_a/n_a)^2/(n_a-1) + (var_b/n_b)^2/(n_b-1))
/// ```
///
/// and the two-tailed p-value from the t-distribution with `df` degrees of
/// freedom. A single zero-variance group needs no special casing: its term
/// drops out of both sums and `df` degenerates to the other group's n-1.
/// Two zero-variance groups leave t undefined and error out.
pub fn compare_summaries(a: &GroupSummary, b: &GroupSummary) -> Result<WelchTTest> {
    a.validate()?;
    b.validate()?;

    let (variance_a, variance_b) = (a.variance(), b.variance());
    let (n_a, n_b) = (a.count as f64, b.count as f64);

    // Squared standard error of each group's mean
    let sem2_a = variance_a / n_a;
    let sem2_b = variance_b / n_b;
    let pooled = sem2_a + sem2_b;

    if pooled == 0.0 {
        return Err(ComparisonError::ZeroVariance);
    }

    let statistic = (a.mean - b.mean) / pooled.sqrt();
    let df = pooled * pooled / (sem2_a * sem2_a / (n_a - 1.0) + sem2_b * sem2_b / (n_b - 1.0));

    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|source| ComparisonError::Distribution { df, source })?;
    let pvalue = 2.0 * t_dist.cdf(-statistic.abs());

    Ok(WelchTTest {
        statistic,
        pvalue,
        df,
        mean_a: a.mean,
        mean_b: b.mean,
        variance_a,
        variance_b,
    })
}
