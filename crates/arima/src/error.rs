//! Error types for the trendline-arima crate.

/// Error type for all fallible operations in the trendline-arima crate.
///
/// Every variant is raised by a precondition check before any computation
/// starts, so a returned error never comes with a partial result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArimaError {
    /// Returned when an argument is outside its valid domain (e.g. an empty
    /// series).
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the series is too short for the requested orders.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the least-squares estimator fails to converge.
    #[error("optimisation failed to converge")]
    OptimizationFailed,
}
