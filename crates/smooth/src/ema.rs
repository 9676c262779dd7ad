//! Exponential moving average.
//!
//! # Formula
//!
//! ```text
//! EMA[0] = x[0]
//! EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1]
//! ```
//!
//! The normalized variant divides the decayed sum of observations by the
//! decayed sum of weights actually in use:
//!
//! ```text
//! EMA_n[t] = sum_k (1 - alpha)^k * x[t-k] / sum_k (1 - alpha)^k,   k = 0..=t
//! ```
//!
//! which removes the bias towards `x[0]` early in the series.

use crate::error::SmoothError;

/// Recursive exponential moving average.
///
/// Output has the same length as `series`. `alpha = 1` puts full weight on
/// the most recent value and returns the input unchanged.
///
/// # Errors
///
/// [`SmoothError::InvalidParameter`] when `alpha` is not in `(0, 1]` or
/// `series` is empty; [`SmoothError::NonFiniteData`] when `series` holds NaN
/// or infinity.
pub fn ema(series: &[f64], alpha: f64) -> Result<Vec<f64>, SmoothError> {
    validate(series, alpha)?;

    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(series.len());
    let mut prev = series[0];
    out.push(prev);
    for &x in &series[1..] {
        prev = alpha * x + decay * prev;
        out.push(prev);
    }
    Ok(out)
}

/// Exponential moving average normalized by the sum of the weights in use.
///
/// # Errors
///
/// Same as [`ema`].
pub fn ema_normalized(series: &[f64], alpha: f64) -> Result<Vec<f64>, SmoothError> {
    validate(series, alpha)?;

    let decay = 1.0 - alpha;
    let mut weighted = 0.0;
    let mut norm = 0.0;
    Ok(series
        .iter()
        .map(|&x| {
            weighted = x + decay * weighted;
            norm = 1.0 + decay * norm;
            weighted / norm
        })
        .collect())
}

fn validate(series: &[f64], alpha: f64) -> Result<(), SmoothError> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(SmoothError::invalid(format!(
            "alpha must be in (0, 1], got {alpha}"
        )));
    }
    if series.is_empty() {
        return Err(SmoothError::invalid("input series is empty"));
    }
    if series.iter().any(|x| !x.is_finite()) {
        return Err(SmoothError::NonFiniteData);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_value_is_unchanged() {
        for alpha in [0.01, 0.2, 0.5, 1.0] {
            assert_eq!(ema(&[7.5], alpha).unwrap(), vec![7.5]);
            assert_eq!(ema_normalized(&[7.5], alpha).unwrap(), vec![7.5]);
        }
    }

    #[test]
    fn alpha_one_is_identity() {
        let series = [3.0, -1.0, 4.0, 1.5];
        assert_eq!(ema(&series, 1.0).unwrap(), series.to_vec());
        assert_eq!(ema_normalized(&series, 1.0).unwrap(), series.to_vec());
    }

    #[test]
    fn recursive_by_hand() {
        // 0.2: [10, 0.2*20 + 0.8*10 = 12, 0.2*30 + 0.8*12 = 15.6]
        let out = ema(&[10.0, 20.0, 30.0], 0.2).unwrap();
        assert_relative_eq!(out[0], 10.0);
        assert_relative_eq!(out[1], 12.0, epsilon = 1e-12);
        assert_relative_eq!(out[2], 15.6, epsilon = 1e-12);
    }

    #[test]
    fn normalized_by_hand() {
        // alpha 0.5, decay 0.5
        // t=1: (20 + 0.5*10) / 1.5 = 16.666..
        // t=2: (30 + 0.5*20 + 0.25*10) / 1.75 = 42.5 / 1.75
        let out = ema_normalized(&[10.0, 20.0, 30.0], 0.5).unwrap();
        assert_relative_eq!(out[0], 10.0);
        assert_relative_eq!(out[1], 25.0 / 1.5, epsilon = 1e-12);
        assert_relative_eq!(out[2], 42.5 / 1.75, epsilon = 1e-12);
    }

    #[test]
    fn constant_series_stays_constant() {
        let series = [4.0; 20];
        for v in ema(&series, 0.3).unwrap() {
            assert_relative_eq!(v, 4.0, epsilon = 1e-12);
        }
        for v in ema_normalized(&series, 0.3).unwrap() {
            assert_relative_eq!(v, 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn alpha_out_of_range() {
        for alpha in [0.0, -0.1, 1.01, f64::NAN, f64::INFINITY] {
            let err = ema(&[1.0, 2.0], alpha).unwrap_err();
            assert!(
                matches!(err, SmoothError::InvalidParameter { .. }),
                "alpha = {alpha}"
            );
        }
    }

    #[test]
    fn empty_series() {
        let err = ema(&[], 0.5).unwrap_err();
        assert!(matches!(err, SmoothError::InvalidParameter { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn non_finite_series() {
        let err = ema_normalized(&[1.0, f64::NAN], 0.5).unwrap_err();
        assert!(matches!(err, SmoothError::NonFiniteData));
    }
}
