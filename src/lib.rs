//! tstat - two-sample Student's t tests from summary statistics
//!
//! tstat answers one question: given the mean, standard deviation and size of
//! two independent samples, do their population means differ at a chosen
//! significance level?
//!
//! # Procedures
//!
//! | Procedure | Variance assumption | Degrees of freedom |
//! |-----------|---------------------|--------------------|
//! | pooled-variance t-test | equal | `n₁ + n₂ - 2` |
//! | Welch's t-test | unequal | Welch–Satterthwaite (real-valued) |
//!
//! Each run produces the t-statistic, the two-tailed probability and a
//! conclusion for each of the alternatives `mean₁ ≠ mean₂`, `mean₁ < mean₂`
//! and `mean₁ > mean₂`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          TwoSampleTTestAlgorithms (pooled, Welch)       │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ generic over
//! ┌──────────────────────────▼──────────────────────────────┐
//! │  StudentTEvaluator (IncompleteBeta, StatrsStudentsT)    │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │  statrs (regularized incomplete beta, sample moments)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are plain data; [`TTestResult`](stats::TTestResult) implements
//! `Display` for a printable report.
//!
//! # Example
//!
//! ```
//! use tstat::stats::{Conclusion, equal_variance_ttest};
//!
//! let result = equal_variance_ttest(20.14458, 6.41470, 249, 30.48101, 6.10771, 79, 0.05).unwrap();
//! assert_eq!(result.degrees_of_freedom, 326.0);
//! assert_eq!(result.conclusions.not_equal, Conclusion::NotRejected);
//! ```

pub mod stats;

// Re-export main types for convenience
pub use stats::{
    IncompleteBeta, SampleSummary, StatsError, StatsResult, StudentTEvaluator, TTestOptions,
    TTestResult, TwoSampleTTestAlgorithms, VarianceAssumption, equal_variance_ttest,
    unequal_variance_ttest,
};
