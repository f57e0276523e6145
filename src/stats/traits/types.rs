//! Types for two-sample t-test algorithms.

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::impl_generic::sample_summary_impl;

/// Summary statistics of one sample: mean, sample standard deviation and size.
///
/// Built once per sample, before a test runs. Use [`SampleSummary::from_slice`]
/// to compute it from raw observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected)
    pub std_dev: f64,
    /// Number of observations
    pub count: usize,
}

impl SampleSummary {
    /// Create a summary from precomputed statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidParameter`] if the mean is not finite or the
    /// standard deviation is negative or not finite. The count is checked by the
    /// tests themselves, which need at least two observations.
    pub fn new(mean: f64, std_dev: f64, count: usize) -> StatsResult<Self> {
        if !mean.is_finite() {
            return Err(StatsError::invalid_parameter(
                "mean",
                mean,
                "must be finite",
            ));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(StatsError::invalid_parameter(
                "std_dev",
                std_dev,
                "must be finite and non-negative",
            ));
        }
        Ok(Self {
            mean,
            std_dev,
            count,
        })
    }

    /// Compute mean, sample standard deviation and count from raw observations.
    ///
    /// ```
    /// use tstat::stats::SampleSummary;
    ///
    /// let s = SampleSummary::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(s.count, 5);
    /// assert!((s.mean - 3.0).abs() < 1e-12);
    /// ```
    pub fn from_slice(data: &[f64]) -> StatsResult<Self> {
        sample_summary_impl(data, "sample")
    }

    /// Sample variance, `std_dev²`.
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Squared standard error of the mean, `std_dev² / count`.
    pub fn sem_squared(&self) -> f64 {
        self.variance() / self.count as f64
    }
}

/// Whether the two populations are assumed to share a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceAssumption {
    /// Pooled-variance (Student's) t-test.
    Equal,
    /// Welch's t-test with Welch–Satterthwaite degrees of freedom.
    #[default]
    Unequal,
}

impl VarianceAssumption {
    /// Choose a procedure by comparing two standard deviations with a relative tolerance.
    ///
    /// Returns `Equal` when `|sd1 - sd2| <= rel_tol * max(sd1, sd2)`, so two zero
    /// standard deviations count as equal. A `rel_tol` of zero reduces to exact equality.
    pub fn infer(sd1: f64, sd2: f64, rel_tol: f64) -> Self {
        let scale = sd1.abs().max(sd2.abs());
        if (sd1 - sd2).abs() <= rel_tol.abs() * scale {
            Self::Equal
        } else {
            Self::Unequal
        }
    }

    /// Title used in reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Equal => "Student t test for two samples (equal variances)",
            Self::Unequal => "Student t test for two samples (unequal variances)",
        }
    }
}

/// Options for two-sample t-tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestOptions {
    /// Significance level, strictly between 0 and 1 (default: 0.05)
    pub alpha: f64,
    /// Variance assumption selecting the procedure (default: Unequal)
    pub variance: VarianceAssumption,
}

impl Default for TTestOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            variance: VarianceAssumption::Unequal,
        }
    }
}

impl TTestOptions {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_variance(mut self, variance: VarianceAssumption) -> Self {
        self.variance = variance;
        self
    }
}

/// Alternative hypothesis tested against the null of equal means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// Sample 1 mean != sample 2 mean
    NotEqual,
    /// Sample 1 mean < sample 2 mean
    Less,
    /// Sample 1 mean > sample 2 mean
    Greater,
}

impl Alternative {
    /// All alternatives, in report order.
    pub const ALL: [Alternative; 3] = [Self::NotEqual, Self::Less, Self::Greater];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotEqual => "Sample 1 Mean != Sample 2 Mean",
            Self::Less => "Sample 1 Mean <  Sample 2 Mean",
            Self::Greater => "Sample 1 Mean >  Sample 2 Mean",
        }
    }
}

/// Outcome of one alternative hypothesis.
///
/// The labeling follows the classic NIST-handbook report: a probability below
/// the threshold is reported as `NotRejected`, anything else as `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    Rejected,
    NotRejected,
}

impl Conclusion {
    /// `NotRejected` iff `probability < threshold`.
    pub fn from_threshold(probability: f64, threshold: f64) -> Self {
        if probability < threshold {
            Self::NotRejected
        } else {
            Self::Rejected
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rejected => "REJECTED",
            Self::NotRejected => "NOT REJECTED",
        }
    }
}

/// Conclusions for the three alternative hypotheses, always evaluated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypothesisConclusions {
    pub not_equal: Conclusion,
    pub less: Conclusion,
    pub greater: Conclusion,
}

impl HypothesisConclusions {
    pub fn get(&self, alternative: Alternative) -> Conclusion {
        match alternative {
            Alternative::NotEqual => self.not_equal,
            Alternative::Less => self.less,
            Alternative::Greater => self.greater,
        }
    }
}

/// Result of a two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    /// Procedure that produced this result
    pub variance: VarianceAssumption,
    /// First sample
    pub sample1: SampleSummary,
    /// Second sample
    pub sample2: SampleSummary,
    /// Significance level the conclusions were evaluated at
    pub alpha: f64,
    /// Degrees of freedom (integer-valued for the pooled test, real for Welch)
    pub degrees_of_freedom: f64,
    /// Pooled standard deviation (equal-variance test only)
    pub pooled_std_dev: Option<f64>,
    /// t-statistic
    pub t_statistic: f64,
    /// Two-tailed probability, `2 * P(T > |t|)`
    pub two_tailed_probability: f64,
    /// `P(T <= t)`
    pub lower_tail_probability: f64,
    /// `P(T > t)`
    pub upper_tail_probability: f64,
    /// Conclusions for the three alternative hypotheses
    pub conclusions: HypothesisConclusions,
}
