//! Error types for the trendline-smooth crate.

/// Error type for all fallible operations in the trendline-smooth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SmoothError {
    /// Returned when an argument is outside its valid domain.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when input contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,
}

impl SmoothError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_parameter() {
        let e = SmoothError::invalid("alpha must be in (0, 1], got 2");
        assert_eq!(
            e.to_string(),
            "invalid parameter: alpha must be in (0, 1], got 2"
        );
    }

    #[test]
    fn error_non_finite_data() {
        let e = SmoothError::NonFiniteData;
        assert_eq!(e.to_string(), "input data contains non-finite values");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SmoothError>();
    }
}
