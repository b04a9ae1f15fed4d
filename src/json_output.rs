//! JSON output format for comparison results

use serde::{Deserialize, Serialize};

use crate::significance::{Assessment, GroupSummary};

/// Summary statistics for one group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonGroup {
    /// Mean of the measurements
    pub mean: f64,
    /// Sample standard deviation
    pub stdev: f64,
    /// Number of measurements
    pub count: u64,
}

impl From<&GroupSummary> for JsonGroup {
    fn from(summary: &GroupSummary) -> Self {
        Self {
            mean: summary.mean,
            stdev: summary.stdev,
            count: summary.count,
        }
    }
}

/// A complete comparison result (--format json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparison {
    /// t-statistic value
    pub statistic: f64,
    /// Two-tailed p-value
    pub pvalue: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,
    /// Significance level the verdict was judged at
    pub alpha: f64,
    /// Whether pvalue < alpha
    pub significant: bool,
    /// Group A summary
    pub group_a: JsonGroup,
    /// Group B summary
    pub group_b: JsonGroup,
}

impl JsonComparison {
    /// Build the JSON payload from an assessment and the group summaries
    pub fn new(assessment: &Assessment, group_a: &GroupSummary, group_b: &GroupSummary) -> Self {
        Self {
            statistic: assessment.test.statistic,
            pvalue: assessment.test.pvalue,
            df: assessment.test.df,
            alpha: assessment.alpha,
            significant: assessment.is_significant(),
            group_a: group_a.into(),
            group_b: group_b.into(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::significance::{assess, compare_samples, DEFAULT_ALPHA};

    #[test]
    fn test_json_comparison_round_trip() {
        let a = [10.0, 12.0, 11.0, 13.0, 10.0];
        let b = [25.0, 27.0, 26.0, 28.0, 25.0];

        let test = compare_samples(&a, &b).unwrap();
        let assessment = assess(test, DEFAULT_ALPHA);
        let json = JsonComparison::new(
            &assessment,
            &GroupSummary::from_samples(&a).unwrap(),
            &GroupSummary::from_samples(&b).unwrap(),
        );

        let serialized = json.to_json_string().unwrap();
        assert!(serialized.contains("\"significant\": true"));

        let parsed: JsonComparison = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed.group_a.count, 5);
        assert_eq!(parsed.alpha, DEFAULT_ALPHA);
        assert!(parsed.pvalue < 0.05);
    }
}
