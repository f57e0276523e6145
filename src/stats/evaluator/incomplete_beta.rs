//! Default Student's t evaluator.

use crate::stats::continuous::StudentT;
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::StatsResult;
use crate::stats::traits::StudentTEvaluator;

/// Evaluates the t distribution through the regularized incomplete beta function.
///
/// A fresh [`StudentT`] is built for every call, so invalid degrees of freedom
/// surface as [`StatsError::InvalidDegreesOfFreedom`](crate::stats::StatsError).
///
/// ```
/// use tstat::stats::{IncompleteBeta, StudentTEvaluator};
///
/// let p = IncompleteBeta.upper_tail_probability(10.0, 2.228).unwrap();
/// assert!((p - 0.025).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncompleteBeta;

impl StudentTEvaluator for IncompleteBeta {
    fn cdf(&self, df: f64, x: f64) -> StatsResult<f64> {
        Ok(StudentT::new(df)?.cdf(x))
    }

    fn upper_tail_probability(&self, df: f64, x: f64) -> StatsResult<f64> {
        Ok(StudentT::new(df)?.sf(x))
    }
}
