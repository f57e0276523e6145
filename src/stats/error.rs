//! Error types for statistical operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Invalid parameter value (significance level, summary statistic, observation).
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Input data has insufficient length.
    #[error("Insufficient data in {context}: need {required} elements, got {got}")]
    InsufficientData {
        required: usize,
        got: usize,
        context: String,
    },

    /// Degrees of freedom are not a positive finite number.
    #[error("Invalid degrees of freedom {df} in {context}: must be positive and finite")]
    InvalidDegreesOfFreedom { df: f64, context: String },

    /// A denominator of the test statistic evaluated to zero.
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    /// Numerical computation failed.
    #[error("Numerical error: {message}")]
    NumericalError { message: String },
}

impl StatsError {
    /// Whether the caller supplied bad input (as opposed to a degenerate computation).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::InsufficientData { .. }
        )
    }

    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}
