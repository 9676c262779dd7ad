//! Coefficient sources: uniform sampling and the stationarity-preserving
//! reparametrisation used by the least-squares estimator.

use rand::Rng;

/// Lower bound (inclusive) of uniformly sampled coefficients.
pub(crate) const COEFF_LOW: f64 = -0.5;
/// Upper bound (exclusive) of uniformly sampled coefficients.
pub(crate) const COEFF_HIGH: f64 = 0.5;

/// How AR and MA coefficients are obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Estimator {
    /// Each coefficient drawn independently from `[-0.5, 0.5)`.
    #[default]
    Uniform,
    /// Conditional sum of squares minimised by Nelder-Mead.
    LeastSquares,
}

/// Draws `n` coefficients independently from `[COEFF_LOW, COEFF_HIGH)`.
pub(crate) fn sample_uniform(n: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..n)
        .map(|_| rng.random_range(COEFF_LOW..COEFF_HIGH))
        .collect()
}

/// Maps unconstrained reals to stationary (AR) or invertible (MA)
/// coefficients.
///
/// Each value goes through `tanh` to become a partial autocorrelation in
/// (-1, 1); the Durbin-Levinson recursion then turns the partial
/// autocorrelations into polynomial coefficients.
pub(crate) fn unconstrained_to_coeffs(raw: &[f64]) -> Vec<f64> {
    let pacf: Vec<f64> = raw.iter().map(|a| a.tanh()).collect();
    let mut coeffs: Vec<f64> = Vec::with_capacity(pacf.len());

    for (k, &r) in pacf.iter().enumerate() {
        let updated: Vec<f64> = (0..k).map(|j| coeffs[j] - r * coeffs[k - 1 - j]).collect();
        coeffs.clear();
        coeffs.extend(updated);
        coeffs.push(r);
    }

    coeffs
}
