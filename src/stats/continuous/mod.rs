//! Continuous probability distributions.

mod student_t;

pub use student_t::StudentT;

/// Special functions backed by statrs.
pub(crate) mod special {
    use statrs::function::beta as statrs_beta;

    /// Regularized incomplete beta function: I_x(a, b)
    ///
    /// Returns NaN outside the domain (a, b > 0, x in [0, 1]) instead of panicking.
    pub fn betainc(a: f64, b: f64, x: f64) -> f64 {
        statrs_beta::checked_beta_reg(a, b, x).unwrap_or(f64::NAN)
    }

}
