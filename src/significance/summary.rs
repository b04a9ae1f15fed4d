// Per-group summary statistics (mean, sample standard deviation, count)

use crate::significance::error::{ComparisonError, Result};

/// Summary statistics describing one group of timing measurements
///
/// `stdev` is the sample standard deviation (n-1 denominator), matching
/// what benchmark harnesses report next to a mean and a run count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSummary {
    /// Mean of the measurements
    pub mean: f64,

    /// Sample standard deviation (Bessel-corrected)
    pub stdev: f64,

    /// Number of measurements
    pub count: u64,
}

impl GroupSummary {
    /// Build a summary from already-known statistics
    ///
    /// No validation happens here; [`compare_summaries`] rejects negative
    /// `stdev` and counts below 2.
    ///
    /// [`compare_summaries`]: crate::significance::compare_summaries
    pub fn new(mean: f64, stdev: f64, count: u64) -> Self {
        Self { mean, stdev, count }
    }

    /// Derive a summary from raw measurements
    ///
    /// # Example
    /// ```
    /// use significa::significance::GroupSummary;
    ///
    /// let summary = GroupSummary::from_samples(&[10.0, 12.0, 11.0, 13.0, 10.0]).unwrap();
    /// assert!((summary.mean - 11.2).abs() < 1e-12);
    /// assert_eq!(summary.count, 5);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        match samples.len() {
            0 => Err(ComparisonError::EmptyGroup),
            1 => Err(ComparisonError::InsufficientSamples { count: 1 }),
            n => {
                let count = n as f64;
                let mean = samples.iter().sum::<f64>() / count;
                let variance = samples
                    .iter()
                    .map(|x| (x - mean) * (x - mean))
                    .sum::<f64>()
                    / (count - 1.0);

                Ok(Self {
                    mean,
                    stdev: variance.sqrt(),
                    count: n as u64,
                })
            }
        }
    }

    /// Sample variance (stdev squared)
    pub fn variance(&self) -> f64 {
        self.stdev * self.stdev
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.count < 2 {
            return Err(ComparisonError::InsufficientSamples { count: self.count });
        }
        if self.stdev < 0.0 {
            return Err(ComparisonError::NegativeStdev { stdev: self.stdev });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_basic() {
        let summary = GroupSummary::from_samples(&[0.09, 0.12, 0.12, 0.10, 0.09]).unwrap();

        assert!((summary.mean - 0.104).abs() < 1e-12);
        // Sample variance 0.00023, stdev its square root
        assert!((summary.stdev - 0.00023_f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.count, 5);
    }

    #[test]
    fn test_from_samples_constant_values() {
        let summary = GroupSummary::from_samples(&[0.03, 0.03, 0.03, 0.03, 0.03]).unwrap();

        assert_eq!(summary.mean, 0.03);
        assert_eq!(summary.stdev, 0.0);
        assert_eq!(summary.variance(), 0.0);
    }

    #[test]
    fn test_from_samples_empty() {
        assert!(matches!(
            GroupSummary::from_samples(&[]),
            Err(ComparisonError::EmptyGroup)
        ));
    }

    #[test]
    fn test_from_samples_single_measurement() {
        assert!(matches!(
            GroupSummary::from_samples(&[0.09]),
            Err(ComparisonError::InsufficientSamples { count: 1 })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_stdev() {
        let summary = GroupSummary::new(0.104, -0.012, 5);
        assert!(matches!(
            summary.validate(),
            Err(ComparisonError::NegativeStdev { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_count_below_two() {
        let summary = GroupSummary::new(0.104, 0.012, 1);
        assert!(matches!(
            summary.validate(),
            Err(ComparisonError::InsufficientSamples { count: 1 })
        ));
    }
}
