//! Two-sample t-tests for every Student's t evaluator.

use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{
    ttest_ind_equal_var_impl, ttest_ind_from_stats_impl, ttest_ind_impl, ttest_ind_welch_impl,
};
use crate::stats::traits::{
    SampleSummary, StudentTEvaluator, TTestOptions, TTestResult, TwoSampleTTestAlgorithms,
};

impl<E: StudentTEvaluator> TwoSampleTTestAlgorithms for E {
    fn ttest_ind_equal_var(
        &self,
        a: &SampleSummary,
        b: &SampleSummary,
        alpha: f64,
    ) -> StatsResult<TTestResult> {
        ttest_ind_equal_var_impl(self, a, b, alpha)
    }

    fn ttest_ind_welch(
        &self,
        a: &SampleSummary,
        b: &SampleSummary,
        alpha: f64,
    ) -> StatsResult<TTestResult> {
        ttest_ind_welch_impl(self, a, b, alpha)
    }

    fn ttest_ind_from_stats(
        &self,
        a: &SampleSummary,
        b: &SampleSummary,
        options: &TTestOptions,
    ) -> StatsResult<TTestResult> {
        ttest_ind_from_stats_impl(self, a, b, options)
    }

    fn ttest_ind(&self, a: &[f64], b: &[f64], options: &TTestOptions) -> StatsResult<TTestResult> {
        ttest_ind_impl(self, a, b, options)
    }
}
