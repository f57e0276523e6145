//! Student's t evaluator backed by `statrs`.

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::traits::StudentTEvaluator;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Evaluates the t distribution with `statrs::distribution::StudentsT`.
///
/// Independent of [`IncompleteBeta`](super::IncompleteBeta) above the special
/// function layer, which makes it a useful cross-check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsStudentsT;

impl StatrsStudentsT {
    fn distribution(df: f64) -> StatsResult<StudentsT> {
        if !df.is_finite() {
            return Err(StatsError::InvalidDegreesOfFreedom {
                df,
                context: "statrs StudentsT".to_string(),
            });
        }
        StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::InvalidDegreesOfFreedom {
            df,
            context: format!("statrs StudentsT: {}", e),
        })
    }
}

impl StudentTEvaluator for StatrsStudentsT {
    fn cdf(&self, df: f64, x: f64) -> StatsResult<f64> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        Ok(Self::distribution(df)?.cdf(x))
    }

    fn upper_tail_probability(&self, df: f64, x: f64) -> StatsResult<f64> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        Ok(Self::distribution(df)?.sf(x))
    }
}
