//! Weighted moving average over a sliding window.
//!
//! The window length is `weights.len()`. Weights are normalized to sum to 1
//! and applied in order: `weights[0]` to the oldest value of each window,
//! the last weight to the newest.
//!
//! ```text
//! WMA[i] = sum_j w[j] * x[i + j] / sum_j w[j],   i = 0..=n-w
//! ```

use crate::error::SmoothError;

/// Weighted moving average of `series` with the given window weights.
///
/// Returns `series.len() - weights.len() + 1` values, one per full window.
///
/// # Errors
///
/// [`SmoothError::InvalidParameter`] when `series` or `weights` is empty,
/// when there are more weights than observations, or when the weights do not
/// have a finite, non-zero sum; [`SmoothError::NonFiniteData`] when `series`
/// holds NaN or infinity.
///
/// # Example
///
/// ```
/// use trendline_smooth::wma;
///
/// let out = wma(&[10.0, 20.0, 30.0, 40.0], &[0.1, 0.3, 0.6]).unwrap();
/// assert_eq!(out.len(), 2);
/// assert!((out[0] - 25.0).abs() < 1e-12);
/// ```
pub fn wma(series: &[f64], weights: &[f64]) -> Result<Vec<f64>, SmoothError> {
    if series.is_empty() || weights.is_empty() {
        return Err(SmoothError::invalid("series and weights must not be empty"));
    }
    if weights.len() > series.len() {
        return Err(SmoothError::invalid(format!(
            "window of {} weights exceeds {} observations",
            weights.len(),
            series.len()
        )));
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total == 0.0 {
        return Err(SmoothError::invalid(format!(
            "weights must have a finite non-zero sum, got {total}"
        )));
    }
    if series.iter().any(|x| !x.is_finite()) {
        return Err(SmoothError::NonFiniteData);
    }

    let normalized: Vec<f64> = weights.iter().map(|w| w / total).collect();
    Ok(series
        .windows(normalized.len())
        .map(|window| window.iter().zip(&normalized).map(|(x, w)| x * w).sum::<f64>())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equal_weights_average() {
        let out = wma(&[10.0, 20.0, 30.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn recent_weighted_window() {
        // [10, 20, 30, 40, 50, 60] with [0.1, 0.3, 0.6]
        // first window: 1 + 6 + 18 = 25
        let out = wma(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0], &[0.1, 0.3, 0.6]).unwrap();
        assert_eq!(out.len(), 4);
        for (i, expected) in [25.0, 35.0, 45.0, 55.0].iter().enumerate() {
            assert_relative_eq!(out[i], *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn unnormalized_weights_are_scaled() {
        let a = wma(&[1.0, 4.0, 9.0, 16.0], &[1.0, 3.0]).unwrap();
        let b = wma(&[1.0, 4.0, 9.0, 16.0], &[0.25, 0.75]).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_weight_is_identity() {
        let series = [2.0, 7.0, 1.0];
        assert_eq!(wma(&series, &[5.0]).unwrap(), series.to_vec());
    }

    #[test]
    fn window_equal_to_length() {
        let out = wma(&[2.0, 4.0], &[1.0, 1.0]).unwrap();
        assert_eq!(out, vec![3.0]);
    }

    #[test]
    fn empty_inputs() {
        assert!(matches!(
            wma(&[], &[1.0]).unwrap_err(),
            SmoothError::InvalidParameter { .. }
        ));
        assert!(matches!(
            wma(&[1.0], &[]).unwrap_err(),
            SmoothError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn weights_longer_than_data() {
        let err = wma(&[1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter: window of 3 weights exceeds 2 observations"
        );
    }

    #[test]
    fn zero_sum_weights() {
        let err = wma(&[1.0, 2.0, 3.0], &[1.0, -1.0]).unwrap_err();
        assert!(matches!(err, SmoothError::InvalidParameter { .. }));
    }

    #[test]
    fn non_finite_series() {
        let err = wma(&[1.0, f64::INFINITY, 3.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, SmoothError::NonFiniteData));
    }
}
