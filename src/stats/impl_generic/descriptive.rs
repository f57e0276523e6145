//! Generic descriptive statistics for raw samples.

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::traits::SampleSummary;
use statrs::statistics::Statistics;

/// Mean, Bessel-corrected standard deviation and size of a raw sample.
///
/// Requires at least two finite observations.
pub fn sample_summary_impl(data: &[f64], context: &str) -> StatsResult<SampleSummary> {
    let n = data.len();
    if n < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: n,
            context: context.to_string(),
        });
    }
    if let Some(&bad) = data.iter().find(|x| !x.is_finite()) {
        return Err(StatsError::invalid_parameter(
            "data",
            bad,
            "observations must be finite",
        ));
    }

    Ok(SampleSummary {
        mean: data.iter().mean(),
        std_dev: data.iter().std_dev(),
        count: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_summary() {
        let s = sample_summary_impl(&[1.0, 2.0, 3.0, 4.0, 5.0], "x").unwrap();
        assert_eq!(s.count, 5);
        assert!((s.mean - 3.0).abs() < 1e-12);
        assert!((s.std_dev - 1.5811388300841898).abs() < 1e-12);
    }

    #[test]
    fn test_constant_sample_has_zero_std() {
        let s = sample_summary_impl(&[1.0, 1.0], "x").unwrap();
        assert_eq!(s.mean, 1.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_unbiased_std_dev() {
        // Σ(x - 5)² = 32 over n - 1 = 7
        let s = sample_summary_impl(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], "x").unwrap();
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_summary_errors() {
        assert!(matches!(
            sample_summary_impl(&[], "x"),
            Err(StatsError::InsufficientData { got: 0, .. })
        ));
        assert!(matches!(
            sample_summary_impl(&[1.0], "x"),
            Err(StatsError::InsufficientData { got: 1, .. })
        ));
        assert!(matches!(
            sample_summary_impl(&[1.0, f64::NAN], "x"),
            Err(StatsError::InvalidParameter { .. })
        ));
    }
}
