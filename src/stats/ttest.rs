//! Seven-argument entry points using the default evaluator.

use crate::stats::error::StatsResult;
use crate::stats::evaluator::IncompleteBeta;
use crate::stats::traits::{SampleSummary, TTestResult, TwoSampleTTestAlgorithms};

/// Pooled-variance two-sample t-test from summary statistics.
///
/// ```
/// use tstat::stats::{Conclusion, equal_variance_ttest};
///
/// let r = equal_variance_ttest(20.14458, 6.41470, 249, 30.48101, 6.10771, 79, 0.05).unwrap();
/// assert_eq!(r.degrees_of_freedom, 326.0);
/// assert!((r.t_statistic + 12.621).abs() < 1e-3);
/// assert_eq!(r.conclusions.greater, Conclusion::Rejected);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn equal_variance_ttest(
    mean1: f64,
    sd1: f64,
    n1: usize,
    mean2: f64,
    sd2: f64,
    n2: usize,
    alpha: f64,
) -> StatsResult<TTestResult> {
    let a = SampleSummary::new(mean1, sd1, n1)?;
    let b = SampleSummary::new(mean2, sd2, n2)?;
    IncompleteBeta.ttest_ind_equal_var(&a, &b, alpha)
}

/// Welch's two-sample t-test from summary statistics.
///
/// ```
/// use tstat::stats::unequal_variance_ttest;
///
/// let r = unequal_variance_ttest(20.14458, 6.41470, 249, 30.48101, 6.10771, 79, 0.05).unwrap();
/// assert!((r.degrees_of_freedom - 136.875).abs() < 1e-3);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn unequal_variance_ttest(
    mean1: f64,
    sd1: f64,
    n1: usize,
    mean2: f64,
    sd2: f64,
    n2: usize,
    alpha: f64,
) -> StatsResult<TTestResult> {
    let a = SampleSummary::new(mean1, sd1, n1)?;
    let b = SampleSummary::new(mean2, sd2, n2)?;
    IncompleteBeta.ttest_ind_welch(&a, &b, alpha)
}
