//! Generic two-sample t-test implementations.
//!
//! Every function here is generic over the [`StudentTEvaluator`] that supplies
//! the t distribution, so the arithmetic can be checked against a stub.
//!
//! # Pooled-variance t-test
//!
//! ```text
//! v  = n₁ + n₂ - 2
//! sp = √[((n₁-1)s₁² + (n₂-1)s₂²) / v]
//! t  = (x̄₁ - x̄₂) / (sp · √(1/n₁ + 1/n₂))
//! ```
//!
//! # Welch's t-test
//!
//! ```text
//! v = (s₁²/n₁ + s₂²/n₂)² / [(s₁²/n₁)²/(n₁-1) + (s₂²/n₂)²/(n₂-1)]
//! t = (x̄₁ - x̄₂) / √(s₁²/n₁ + s₂²/n₂)
//! ```
//!
//! # P-values and conclusions
//!
//! The two-tailed probability is `2 × P(T > |t|)`. The one-sided alternatives
//! use `P(T ≤ t)` (mean₁ < mean₂) and `P(T > t)` (mean₁ > mean₂). Each
//! probability is compared with its threshold and reported as `NotRejected`
//! when strictly below it, `Rejected` otherwise.
//!
//! All input validation happens before the evaluator is called.

use super::descriptive::sample_summary_impl;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::traits::{
    Conclusion, HypothesisConclusions, SampleSummary, StudentTEvaluator, TTestOptions,
    TTestResult, VarianceAssumption,
};
use tracing::{debug, trace};

/// Check that a significance level lies strictly inside (0, 1).
fn validate_alpha(alpha: f64) -> StatsResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(StatsError::invalid_parameter(
            "alpha",
            alpha,
            "significance level must be in (0, 1)",
        ))
    }
}

fn validate_sample(sample: &SampleSummary, context: &str) -> StatsResult<()> {
    if sample.count < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: sample.count,
            context: context.to_string(),
        });
    }
    if !sample.mean.is_finite() {
        return Err(StatsError::invalid_parameter(
            "mean",
            sample.mean,
            "must be finite",
        ));
    }
    if !sample.std_dev.is_finite() || sample.std_dev < 0.0 {
        return Err(StatsError::invalid_parameter(
            "std_dev",
            sample.std_dev,
            "must be finite and non-negative",
        ));
    }
    Ok(())
}

fn validate_inputs(a: &SampleSummary, b: &SampleSummary, alpha: f64) -> StatsResult<()> {
    validate_alpha(alpha)
        .and_then(|()| validate_sample(a, "sample 1"))
        .and_then(|()| validate_sample(b, "sample 2"))
        .inspect_err(|e| debug!(error = %e, "rejected t-test input"))
}

/// Generic implementation of the pooled-variance two-sample t-test.
pub fn ttest_ind_equal_var_impl<E>(
    evaluator: &E,
    a: &SampleSummary,
    b: &SampleSummary,
    alpha: f64,
) -> StatsResult<TTestResult>
where
    E: StudentTEvaluator + ?Sized,
{
    validate_inputs(a, b, alpha)?;

    let n1 = a.count as f64;
    let n2 = b.count as f64;

    // count >= 2 on both sides, so df >= 2
    let df = n1 + n2 - 2.0;

    let scale = a.std_dev.max(b.std_dev);
    if scale == 0.0 {
        return Err(StatsError::DivisionByZero {
            context: "pooled-variance t-test (pooled standard deviation is zero)".to_string(),
        });
    }

    // Squares are taken relative to the larger sd so they stay representable
    let r1 = a.std_dev / scale;
    let r2 = b.std_dev / scale;
    let sp = scale * (((n1 - 1.0) * r1 * r1 + (n2 - 1.0) * r2 * r2) / df).sqrt();
    let denom = sp * (1.0 / n1 + 1.0 / n2).sqrt();

    let t_stat = (a.mean - b.mean) / denom;
    debug!(df, pooled_std_dev = sp, t_stat, "pooled-variance t-test");

    finish(
        evaluator,
        VarianceAssumption::Equal,
        a,
        b,
        alpha,
        df,
        Some(sp),
        t_stat,
    )
}

/// Generic implementation of Welch's two-sample t-test.
pub fn ttest_ind_welch_impl<E>(
    evaluator: &E,
    a: &SampleSummary,
    b: &SampleSummary,
    alpha: f64,
) -> StatsResult<TTestResult>
where
    E: StudentTEvaluator + ?Sized,
{
    validate_inputs(a, b, alpha)?;

    let n1 = a.count as f64;
    let n2 = b.count as f64;

    let scale = a.std_dev.max(b.std_dev);
    if scale == 0.0 {
        return Err(StatsError::DivisionByZero {
            context: "Welch t-test (both standard deviations are zero)".to_string(),
        });
    }

    // Squared standard errors in units of scale², which df does not depend on
    let u1 = (a.std_dev / scale).powi(2) / n1;
    let u2 = (b.std_dev / scale).powi(2) / n2;
    let u_sum = u1 + u2;

    // Welch-Satterthwaite
    let df = u_sum * u_sum / (u1 * u1 / (n1 - 1.0) + u2 * u2 / (n2 - 1.0));

    let t_stat = (a.mean - b.mean) / (scale * u_sum.sqrt());
    debug!(df, t_stat, "Welch t-test");

    finish(
        evaluator,
        VarianceAssumption::Unequal,
        a,
        b,
        alpha,
        df,
        None,
        t_stat,
    )
}

/// Dispatch on `options.variance`.
pub fn ttest_ind_from_stats_impl<E>(
    evaluator: &E,
    a: &SampleSummary,
    b: &SampleSummary,
    options: &TTestOptions,
) -> StatsResult<TTestResult>
where
    E: StudentTEvaluator + ?Sized,
{
    match options.variance {
        VarianceAssumption::Equal => ttest_ind_equal_var_impl(evaluator, a, b, options.alpha),
        VarianceAssumption::Unequal => ttest_ind_welch_impl(evaluator, a, b, options.alpha),
    }
}

/// Two-sample t-test on raw observations.
pub fn ttest_ind_impl<E>(
    evaluator: &E,
    a: &[f64],
    b: &[f64],
    options: &TTestOptions,
) -> StatsResult<TTestResult>
where
    E: StudentTEvaluator + ?Sized,
{
    validate_alpha(options.alpha)?;
    let s1 = sample_summary_impl(a, "sample 1")?;
    let s2 = sample_summary_impl(b, "sample 2")?;
    ttest_ind_from_stats_impl(evaluator, &s1, &s2, options)
}

/// Evaluate the three alternative hypotheses.
///
/// * `abs_upper_tail` - `P(T > |t|)`, half the two-tailed probability
/// * `lower_tail` - `P(T <= t)`
/// * `upper_tail` - `P(T > t)`
///
/// The two-sided rule compares `P(T > |t|)` with `alpha / 2`; the one-sided
/// rules compare their tail with `alpha`.
pub fn evaluate_conclusions(
    abs_upper_tail: f64,
    lower_tail: f64,
    upper_tail: f64,
    alpha: f64,
) -> HypothesisConclusions {
    HypothesisConclusions {
        not_equal: Conclusion::from_threshold(abs_upper_tail, alpha / 2.0),
        less: Conclusion::from_threshold(lower_tail, alpha),
        greater: Conclusion::from_threshold(upper_tail, alpha),
    }
}

#[allow(clippy::too_many_arguments)]
fn finish<E>(
    evaluator: &E,
    variance: VarianceAssumption,
    a: &SampleSummary,
    b: &SampleSummary,
    alpha: f64,
    df: f64,
    pooled_std_dev: Option<f64>,
    t_stat: f64,
) -> StatsResult<TTestResult>
where
    E: StudentTEvaluator + ?Sized,
{
    if !t_stat.is_finite() {
        return Err(StatsError::NumericalError {
            message: format!("t statistic is not finite ({})", t_stat),
        });
    }

    let abs_upper_tail = evaluator.upper_tail_probability(df, t_stat.abs())?;
    let lower_tail = evaluator.cdf(df, t_stat)?;
    let upper_tail = evaluator.upper_tail_probability(df, t_stat)?;
    trace!(abs_upper_tail, lower_tail, upper_tail, "t distribution tails");

    let conclusions = evaluate_conclusions(abs_upper_tail, lower_tail, upper_tail, alpha);

    Ok(TTestResult {
        variance,
        sample1: *a,
        sample2: *b,
        alpha,
        degrees_of_freedom: df,
        pooled_std_dev,
        t_statistic: t_stat,
        two_tailed_probability: (2.0 * abs_upper_tail).min(1.0),
        lower_tail_probability: lower_tail,
        upper_tail_probability: upper_tail,
        conclusions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Alternative;
    use std::cell::Cell;

    /// Stub evaluator returning fixed tails and counting calls.
    struct FixedTails {
        lower: f64,
        upper: f64,
        calls: Cell<usize>,
    }

    impl FixedTails {
        fn new(lower: f64) -> Self {
            Self {
                lower,
                upper: 1.0 - lower,
                calls: Cell::new(0),
            }
        }
    }

    impl StudentTEvaluator for FixedTails {
        fn cdf(&self, _df: f64, x: f64) -> StatsResult<f64> {
            self.calls.set(self.calls.get() + 1);
            Ok(if x < 0.0 { self.lower } else { self.upper })
        }

        fn upper_tail_probability(&self, _df: f64, x: f64) -> StatsResult<f64> {
            self.calls.set(self.calls.get() + 1);
            Ok(if x < 0.0 { self.upper } else { self.lower })
        }
    }

    fn summary(mean: f64, std_dev: f64, count: usize) -> SampleSummary {
        SampleSummary {
            mean,
            std_dev,
            count,
        }
    }

    #[test]
    fn test_validate_alpha() {
        assert!(validate_alpha(0.05).is_ok());
        assert!(validate_alpha(0.0).is_err());
        assert!(validate_alpha(1.0).is_err());
        assert!(validate_alpha(1.5).is_err());
        assert!(validate_alpha(-0.1).is_err());
        assert!(validate_alpha(f64::NAN).is_err());
    }

    #[test]
    fn test_pooled_arithmetic_with_stub() {
        let stub = FixedTails::new(0.01);
        let a = summary(3.0, 1.5811388300841898, 5);
        let b = summary(6.0, 3.1622776601683795, 5);

        let result = ttest_ind_equal_var_impl(&stub, &a, &b, 0.05).unwrap();
        assert_eq!(result.degrees_of_freedom, 8.0);
        assert!((result.pooled_std_dev.unwrap() - 2.5).abs() < 1e-12);
        assert!((result.t_statistic - (-1.8973665961010275)).abs() < 1e-12);
        // stub: P(T > |t|) = 0.01
        assert!((result.two_tailed_probability - 0.02).abs() < 1e-15);
        assert_eq!(stub.calls.get(), 3);
    }

    #[test]
    fn test_welch_arithmetic_with_stub() {
        let stub = FixedTails::new(0.2);
        let a = summary(3.0, 1.5811388300841898, 5);
        let b = summary(6.0, 3.1622776601683795, 5);

        let result = ttest_ind_welch_impl(&stub, &a, &b, 0.05).unwrap();
        assert!((result.degrees_of_freedom - 5.882352941176471).abs() < 1e-12);
        assert!(result.pooled_std_dev.is_none());
        assert!((result.t_statistic - (-1.8973665961010275)).abs() < 1e-12);
        assert_eq!(result.variance, VarianceAssumption::Unequal);
    }

    #[test]
    fn test_invalid_alpha_never_reaches_evaluator() {
        let stub = FixedTails::new(0.2);
        let a = summary(1.0, 1.0, 10);
        let b = summary(2.0, 1.0, 10);

        for alpha in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let err = ttest_ind_equal_var_impl(&stub, &a, &b, alpha).unwrap_err();
            assert!(err.is_invalid_input());
            let err = ttest_ind_welch_impl(&stub, &a, &b, alpha).unwrap_err();
            assert!(err.is_invalid_input());
        }
        assert_eq!(stub.calls.get(), 0);
    }

    #[test]
    fn test_insufficient_counts() {
        let stub = FixedTails::new(0.2);
        let a = summary(1.0, 1.0, 1);
        let b = summary(2.0, 1.0, 10);

        let err = ttest_ind_equal_var_impl(&stub, &a, &b, 0.05).unwrap_err();
        assert!(matches!(
            err,
            StatsError::InsufficientData {
                required: 2,
                got: 1,
                ..
            }
        ));
        let err = ttest_ind_welch_impl(&stub, &b, &a, 0.05).unwrap_err();
        assert!(matches!(err, StatsError::InsufficientData { got: 1, .. }));
        assert_eq!(stub.calls.get(), 0);
    }

    #[test]
    fn test_zero_variance_is_division_by_zero() {
        let stub = FixedTails::new(0.2);
        let a = summary(1.0, 0.0, 2);
        let b = summary(0.0, 0.0, 2);

        let err = ttest_ind_equal_var_impl(&stub, &a, &b, 0.05).unwrap_err();
        assert!(matches!(err, StatsError::DivisionByZero { .. }));
        let err = ttest_ind_welch_impl(&stub, &a, &b, 0.05).unwrap_err();
        assert!(matches!(err, StatsError::DivisionByZero { .. }));
        assert_eq!(stub.calls.get(), 0);
    }

    #[test]
    fn test_one_zero_variance_welch() {
        // With one zero variance Welch df collapses to n - 1 of the other sample
        let stub = FixedTails::new(0.2);
        let a = summary(1.0, 2.0, 12);
        let b = summary(0.0, 0.0, 30);

        let result = ttest_ind_welch_impl(&stub, &a, &b, 0.05).unwrap();
        assert!((result.degrees_of_freedom - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_scales_match_unit_scale() {
        let stub = FixedTails::new(0.2);
        let unit_a = summary(0.0, 1.0, 10);
        let unit_b = summary(1.0, 1.0, 10);
        let pooled = ttest_ind_equal_var_impl(&stub, &unit_a, &unit_b, 0.05).unwrap();
        let welch = ttest_ind_welch_impl(&stub, &unit_a, &unit_b, 0.05).unwrap();
        assert!((pooled.t_statistic - (-2.23606797749979)).abs() < 1e-12);

        for scale in [1e160, 1e-160] {
            let a = summary(0.0, scale, 10);
            let b = summary(scale, scale, 10);

            let r = ttest_ind_equal_var_impl(&stub, &a, &b, 0.05).unwrap();
            assert_eq!(r.degrees_of_freedom, 18.0);
            assert!((r.t_statistic - pooled.t_statistic).abs() < 1e-12);
            assert!(((r.pooled_std_dev.unwrap() - scale) / scale).abs() < 1e-12);

            let r = ttest_ind_welch_impl(&stub, &a, &b, 0.05).unwrap();
            assert!((r.degrees_of_freedom - welch.degrees_of_freedom).abs() < 1e-9);
            assert!((r.t_statistic - welch.t_statistic).abs() < 1e-12);
        }
    }

    #[test]
    fn test_evaluate_conclusions_rules() {
        let c = evaluate_conclusions(0.02, 0.02, 0.98, 0.05);
        assert_eq!(c.get(Alternative::NotEqual), Conclusion::NotRejected);
        assert_eq!(c.get(Alternative::Less), Conclusion::NotRejected);
        assert_eq!(c.get(Alternative::Greater), Conclusion::Rejected);

        // Exactly at the threshold is rejected
        let c = evaluate_conclusions(0.025, 0.05, 0.95, 0.05);
        assert_eq!(c.not_equal, Conclusion::Rejected);
        assert_eq!(c.less, Conclusion::Rejected);

        let c = evaluate_conclusions(0.3, 0.7, 0.3, 0.05);
        assert_eq!(c.not_equal, Conclusion::Rejected);
        assert_eq!(c.less, Conclusion::Rejected);
        assert_eq!(c.greater, Conclusion::Rejected);
    }

    #[test]
    fn test_raw_data_path() {
        let stub = FixedTails::new(0.2);
        let opts = TTestOptions::default().with_variance(VarianceAssumption::Equal);

        let result =
            ttest_ind_impl(&stub, &[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0], &opts)
                .unwrap();
        assert!((result.sample1.mean - 3.0).abs() < 1e-12);
        assert!((result.sample2.std_dev - 3.1622776601683795).abs() < 1e-12);
        assert_eq!(result.degrees_of_freedom, 8.0);

        let err = ttest_ind_impl(&stub, &[1.0], &[2.0, 3.0], &opts).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
