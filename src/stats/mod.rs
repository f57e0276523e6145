//! Two-sample Student's t tests.
//!
//! Two procedures share one shape:
//! - pooled-variance t-test (`ttest_ind_equal_var`), assuming a common variance
//! - Welch's t-test (`ttest_ind_welch`), with Welch–Satterthwaite degrees of freedom
//!
//! Both are methods of [`TwoSampleTTestAlgorithms`], implemented for every
//! [`StudentTEvaluator`]. The evaluator supplies the t distribution CDF and
//! upper tail; [`IncompleteBeta`] is the default.
//!
//! ```
//! use tstat::stats::{
//!     IncompleteBeta, SampleSummary, TTestOptions, TwoSampleTTestAlgorithms, VarianceAssumption,
//! };
//!
//! let a = SampleSummary::new(20.14458, 6.41470, 249).unwrap();
//! let b = SampleSummary::new(30.48101, 6.10771, 79).unwrap();
//!
//! let options = TTestOptions::default()
//!     .with_alpha(0.05)
//!     .with_variance(VarianceAssumption::infer(a.std_dev, b.std_dev, 1e-9));
//! let result = IncompleteBeta.ttest_ind_from_stats(&a, &b, &options).unwrap();
//!
//! assert!(result.two_tailed_probability < 1e-20);
//! println!("{}", result);
//! ```

mod continuous;
mod distribution;
mod error;
mod evaluator;
mod impl_generic;
mod report;
mod traits;
mod ttest;


pub use continuous::StudentT;
pub use distribution::ContinuousDistribution;
pub use error::{StatsError, StatsResult};
pub use evaluator::{IncompleteBeta, StatrsStudentsT};
pub use impl_generic::evaluate_conclusions;
pub use report::{format_scientific, format_significant};
pub use traits::{
    Alternative, Conclusion, HypothesisConclusions, SampleSummary, StudentTEvaluator, TTestOptions,
    TTestResult, TwoSampleTTestAlgorithms, VarianceAssumption,
};
pub use ttest::{equal_variance_ttest, unequal_variance_ttest};
