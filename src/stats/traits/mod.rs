//! Statistical algorithm traits.
//!
//! - StudentTEvaluator - the distribution capability the tests are generic over
//! - TwoSampleTTestAlgorithms - pooled and Welch two-sample t-tests

mod hypothesis;
mod types;

pub use hypothesis::{StudentTEvaluator, TwoSampleTTestAlgorithms};
pub use types::{
    Alternative, Conclusion, HypothesisConclusions, SampleSummary, TTestOptions, TTestResult,
    VarianceAssumption,
};
