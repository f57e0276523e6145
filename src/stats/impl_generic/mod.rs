//! Shared implementations, generic over the Student's t evaluator.

mod descriptive;
mod hypothesis;

pub use descriptive::sample_summary_impl;
pub use hypothesis::{
    evaluate_conclusions, ttest_ind_equal_var_impl, ttest_ind_from_stats_impl, ttest_ind_impl,
    ttest_ind_welch_impl,
};
