//! Differencing and its inverse.

use crate::error::ArimaError;

/// Applies first-order differencing `d` times.
///
/// Each pass maps `[x0, x1, ..., x(n-1)]` to `[x1 - x0, ..., x(n-1) - x(n-2)]`,
/// so the result has `series.len() - d` elements. `d = 0` returns a copy of
/// the input.
///
/// # Errors
///
/// Returns [`ArimaError::InsufficientData`] when `d > 0` and the series has
/// `d` or fewer observations (nothing would be left after differencing).
///
/// # Example
///
/// ```
/// use trendline_arima::difference;
///
/// let diffed = difference(&[1.0, 3.0, 6.0, 10.0], 1).unwrap();
/// assert_eq!(diffed, vec![2.0, 3.0, 4.0]);
/// ```
pub fn difference(series: &[f64], d: usize) -> Result<Vec<f64>, ArimaError> {
    if d == 0 {
        return Ok(series.to_vec());
    }
    if series.len() <= d {
        return Err(ArimaError::InsufficientData {
            n: series.len(),
            min: d + 1,
        });
    }

    let mut out = series.to_vec();
    for _ in 0..d {
        out = out.windows(2).map(|w| w[1] - w[0]).collect();
    }
    Ok(out)
}

/// Rebuilds a level series from differences by cumulative summation.
///
/// The output starts with `original[..d]` copied verbatim; every value of
/// `diff_series` is then added to the previous output element. The result
/// has `d + diff_series.len()` elements.
///
/// Seeding from the first `d` original values is exact for `d = 1` only.
/// For `d >= 2` the result is an approximation: a single cumulative sum is
/// applied regardless of `d`. With `d = 0` there is nothing to seed from and
/// `diff_series` is returned unchanged.
///
/// # Errors
///
/// Returns [`ArimaError::InsufficientData`] when `original` has fewer than
/// `d` values.
///
/// # Example
///
/// ```
/// use trendline_arima::inverse_difference;
///
/// let restored = inverse_difference(&[1.0, 3.0], &[2.0, 3.0, 4.0], 1).unwrap();
/// assert_eq!(restored, vec![1.0, 3.0, 6.0, 10.0]);
/// ```
pub fn inverse_difference(
    original: &[f64],
    diff_series: &[f64],
    d: usize,
) -> Result<Vec<f64>, ArimaError> {
    if original.len() < d {
        return Err(ArimaError::InsufficientData {
            n: original.len(),
            min: d,
        });
    }
    if d == 0 {
        return Ok(diff_series.to_vec());
    }

    let mut restored = Vec::with_capacity(d + diff_series.len());
    restored.extend_from_slice(&original[..d]);
    let mut level = original[d - 1];
    for &v in diff_series {
        level += v;
        restored.push(level);
    }
    Ok(restored)
}
