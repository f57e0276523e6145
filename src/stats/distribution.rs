//! Distribution traits.

/// A continuous univariate distribution.
pub trait ContinuousDistribution {
    /// Cumulative distribution function: P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function: P(X > x).
    ///
    /// Implementations with a direct tail formula should override this so
    /// small upper-tail probabilities keep their precision.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }
}
