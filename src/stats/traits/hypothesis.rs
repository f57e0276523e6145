//! Two-sample hypothesis testing algorithms.

use super::{SampleSummary, TTestOptions, TTestResult};
use crate::stats::error::StatsResult;

/// Evaluates the central Student's t distribution for real-valued degrees of freedom.
///
/// This is the only numerical capability the t-tests need. Implementations must
/// compute the upper tail directly (not as `1 - cdf`) so that probabilities near
/// 1e-30 survive, and must accept non-integer `df` for Welch's test.
pub trait StudentTEvaluator {
    /// `P(T <= x)` for `T ~ t(df)`.
    fn cdf(&self, df: f64, x: f64) -> StatsResult<f64>;

    /// `P(T > x)` for `T ~ t(df)`.
    fn upper_tail_probability(&self, df: f64, x: f64) -> StatsResult<f64>;
}

impl<E: StudentTEvaluator + ?Sized> StudentTEvaluator for &E {
    fn cdf(&self, df: f64, x: f64) -> StatsResult<f64> {
        (**self).cdf(df, x)
    }

    fn upper_tail_probability(&self, df: f64, x: f64) -> StatsResult<f64> {
        (**self).upper_tail_probability(df, x)
    }
}

/// Two-sample t-tests.
///
/// Implemented for every [`StudentTEvaluator`], so the evaluator acts as the
/// client the tests run on.
pub trait TwoSampleTTestAlgorithms {
    /// Pooled-variance two-sample t-test.
    ///
    /// Assumes both populations share a variance. Degrees of freedom are
    /// `n1 + n2 - 2`.
    fn ttest_ind_equal_var(
        &self,
        a: &SampleSummary,
        b: &SampleSummary,
        alpha: f64,
    ) -> StatsResult<TTestResult>;

    /// Welch's two-sample t-test.
    ///
    /// Does not assume equal variances; degrees of freedom come from the
    /// Welch–Satterthwaite equation and are generally not an integer.
    fn ttest_ind_welch(
        &self,
        a: &SampleSummary,
        b: &SampleSummary,
        alpha: f64,
    ) -> StatsResult<TTestResult>;

    /// Two-sample t-test from summary statistics, procedure chosen by `options.variance`.
    fn ttest_ind_from_stats(
        &self,
        a: &SampleSummary,
        b: &SampleSummary,
        options: &TTestOptions,
    ) -> StatsResult<TTestResult>;

    /// Two-sample t-test on raw observations.
    fn ttest_ind(&self, a: &[f64], b: &[f64], options: &TTestOptions) -> StatsResult<TTestResult>;
}
