//! Student's t evaluators and the t-test algorithms they drive.
//!
//! - [`IncompleteBeta`] - default evaluator, built on this crate's [`StudentT`](crate::stats::StudentT)
//! - [`StatrsStudentsT`] - delegates to `statrs::distribution::StudentsT`

mod hypothesis;
mod incomplete_beta;
mod statrs_students_t;

pub use incomplete_beta::IncompleteBeta;
pub use statrs_students_t::StatrsStudentsT;
