//! The recursive ARMA trend.
//!
//! Given fixed coefficients, the trend at time `t` is
//!
//! ```text
//! trend[t] = sum_i ar[i] * x[t-1-i] + sum_j ma[j] * e[t-1-j]
//! ```
//!
//! for `t >= max(p, q)`; earlier positions stay at zero. What `e` means is
//! selected by [`MaConvention`].

/// How the moving-average term measures past errors.
///
/// The two conventions produce different recursions and different numbers
/// for the same coefficients; they are not interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaConvention {
    /// `e[t] = x[t] - trend[t]`, recorded as a separate residual sequence
    /// while the recursion runs. Used by the ARIMA pipeline.
    Residual,
    /// `e[t] = x[t] - trend[t]` read back from the trend itself; no residual
    /// sequence is kept. Default for standalone ARMA.
    #[default]
    Detrended,
}

/// Output of [`arma_trend`].
#[derive(Clone, Debug, PartialEq)]
pub struct Recursion {
    /// Trend values, same length as the input; zero during warm-up.
    pub trend: Vec<f64>,
    /// Residuals recorded by the [`MaConvention::Residual`] recursion.
    /// `None` for [`MaConvention::Detrended`].
    pub residuals: Option<Vec<f64>>,
}

/// Runs the ARMA recursion over `series` with fixed coefficients.
///
/// Positions `0..max(ar.len(), ma.len())` are the warm-up region and remain
/// zero. A series no longer than the warm-up yields an all-zero trend.
///
/// # Example
///
/// ```
/// use trendline_arima::{MaConvention, arma_trend};
///
/// let out = arma_trend(&[1.0, 2.0, 3.0], &[0.5], &[], MaConvention::Detrended);
/// assert_eq!(out.trend, vec![0.0, 0.5, 1.0]);
/// assert!(out.residuals.is_none());
/// ```
pub fn arma_trend(series: &[f64], ar: &[f64], ma: &[f64], convention: MaConvention) -> Recursion {
    let n = series.len();
    let warm_up = ar.len().max(ma.len());
    let mut trend = vec![0.0; n];

    match convention {
        MaConvention::Residual => {
            let mut residuals = vec![0.0; n];
            for t in warm_up..n {
                let ar_part = lagged_sum(ar, |i| series[t - 1 - i]);
                let ma_part = lagged_sum(ma, |j| residuals[t - 1 - j]);
                residuals[t] = series[t] - (ar_part + ma_part);
                trend[t] = ar_part + ma_part;
            }
            Recursion {
                trend,
                residuals: Some(residuals),
            }
        }
        MaConvention::Detrended => {
            for t in warm_up..n {
                let ar_part = lagged_sum(ar, |i| series[t - 1 - i]);
                let ma_part = lagged_sum(ma, |j| series[t - 1 - j] - trend[t - 1 - j]);
                trend[t] = ar_part + ma_part;
            }
            Recursion {
                trend,
                residuals: None,
            }
        }
    }
}

/// Sum of squared `series[t] - trend[t]` after the warm-up region.
pub(crate) fn conditional_sum_of_squares(series: &[f64], trend: &[f64], warm_up: usize) -> f64 {
    series
        .iter()
        .zip(trend)
        .skip(warm_up)
        .map(|(x, m)| (x - m) * (x - m))
        .sum()
}

#[inline]
fn lagged_sum(coeffs: &[f64], lagged: impl Fn(usize) -> f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * lagged(i))
        .sum()
}
