// Significance verdicts and the two-line report

use crate::significance::statistics::WelchTTest;

/// Conventional significance level used when none is configured
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Verdict of a comparison at a given significance level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// p < alpha: the means are statistically distinguishable
    SignificantDifference,

    /// p >= alpha: the observed gap is consistent with noise
    NoSignificantDifference,
}

/// A Welch's t-test together with its significance judgment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// The underlying test
    pub test: WelchTTest,

    /// Significance level the verdict was judged at
    pub alpha: f64,

    /// Final verdict
    pub verdict: Verdict,
}

/// Judge a test result against a significance level
pub fn assess(test: WelchTTest, alpha: f64) -> Assessment {
    let verdict = if test.is_significant(alpha) {
        Verdict::SignificantDifference
    } else {
        Verdict::NoSignificantDifference
    };

    Assessment {
        test,
        alpha,
        verdict,
    }
}

impl Assessment {
    /// Whether the verdict is [`Verdict::SignificantDifference`]
    pub fn is_significant(&self) -> bool {
        self.verdict == Verdict::SignificantDifference
    }

    /// Two-line report: the p-value, then the yes/no significance answer
    ///
    /// The layout, including the double space before the answer and the
    /// capitalized `True`/`False`, is part of the output contract:
    ///
    /// ```text
    /// p = 0.0004006838955490907
    /// Are means significantly different (p < 0.05)?  True
    /// ```
    pub fn to_report_string(&self) -> String {
        let answer = if self.is_significant() { "True" } else { "False" };
        format!(
            "p = {}\nAre means significantly different (p < {})?  {}\n",
            self.test.pvalue, self.alpha, answer
        )
    }
}
