//! Summary statistics and error metrics used when reporting model output.

/// Error type for the paired metrics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Returned when a metric is asked for on zero pairs.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when observed and predicted slices differ in length.
    #[error("length mismatch: observed has {observed} elements, predicted has {predicted}")]
    LengthMismatch {
        /// Length of the observed slice.
        observed: usize,
        /// Length of the predicted slice.
        predicted: usize,
    },
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation with N-1 denominator.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Mean squared error between `observed` and `predicted`.
pub fn mse(observed: &[f64], predicted: &[f64]) -> Result<f64, StatsError> {
    paired_mean(observed, predicted, |e| e * e)
}

/// Mean absolute error between `observed` and `predicted`.
pub fn mae(observed: &[f64], predicted: &[f64]) -> Result<f64, StatsError> {
    paired_mean(observed, predicted, f64::abs)
}

/// Root mean squared error between `observed` and `predicted`.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> Result<f64, StatsError> {
    mse(observed, predicted).map(f64::sqrt)
}

fn paired_mean(
    observed: &[f64],
    predicted: &[f64],
    loss: impl Fn(f64) -> f64,
) -> Result<f64, StatsError> {
    if observed.len() != predicted.len() {
        return Err(StatsError::LengthMismatch {
            observed: observed.len(),
            predicted: predicted.len(),
        });
    }
    if observed.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let total: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| loss(o - p))
        .sum();
    Ok(total / observed.len() as f64)
}
