//! Model entry points: ARMA trend and the ARIMA pipeline.

use rand::Rng;
use tracing::debug;

use crate::diff::{difference, inverse_difference};
use crate::error::ArimaError;
use crate::fit::{ArimaFit, ArmaFit};
use crate::optimizer;
use crate::params::{self, Estimator};
use crate::recursion::{MaConvention, arma_trend, conditional_sum_of_squares};
use crate::spec::{ArimaSpec, ArmaSpec};

/// Computes the recursive ARMA(p,q) trend of `series` with uniformly
/// sampled coefficients.
///
/// Shorthand for `ArmaSpec::new(p, q).with_convention(convention).fit(series, rng)`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use trendline_arima::{MaConvention, arma};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let data = [1.0, 2.0, 3.0, 5.0, 8.0];
/// let fit = arma(&data, 2, 1, MaConvention::Detrended, &mut rng).unwrap();
/// assert_eq!(fit.trend().len(), data.len());
/// assert_eq!(&fit.trend()[..2], &[0.0, 0.0]);
/// ```
pub fn arma(
    series: &[f64],
    p: usize,
    q: usize,
    convention: MaConvention,
    rng: &mut impl Rng,
) -> Result<ArmaFit, ArimaError> {
    ArmaSpec::new(p, q)
        .with_convention(convention)
        .fit(series, rng)
}

/// Runs the ARIMA(p,d,q) pipeline with uniformly sampled coefficients.
///
/// Shorthand for `ArimaSpec::new(p, d, q).fit(series, rng)`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use trendline_arima::arima;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let fit = arima(&[1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0], 1, 1, 1, &mut rng).unwrap();
/// assert_eq!(fit.reconstructed()[0], 1.0);
/// assert_eq!(fit.reconstructed().len(), 6);
/// ```
pub fn arima(
    series: &[f64],
    p: usize,
    d: usize,
    q: usize,
    rng: &mut impl Rng,
) -> Result<ArimaFit, ArimaError> {
    ArimaSpec::new(p, d, q).fit(series, rng)
}

/// Validates `data`, obtains coefficients and runs the recursion.
#[tracing::instrument(skip(data, rng), fields(n = data.len()))]
pub(crate) fn fit_arma(
    spec: ArmaSpec,
    data: &[f64],
    rng: &mut impl Rng,
) -> Result<ArmaFit, ArimaError> {
    let (p, q) = (spec.p(), spec.q());

    // 1. Validate
    if data.is_empty() {
        return Err(ArimaError::InvalidParameter {
            reason: "input series is empty".to_string(),
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }
    let min_len = spec.warm_up() + 1;
    if data.len() < min_len {
        return Err(ArimaError::InsufficientData {
            n: data.len(),
            min: min_len,
        });
    }

    // 2. Coefficients
    let (ar, ma) = match spec.estimator() {
        Estimator::Uniform => {
            let ar = params::sample_uniform(p, rng);
            let ma = params::sample_uniform(q, rng);
            (ar, ma)
        }
        Estimator::LeastSquares => {
            optimizer::fit_least_squares(data, p, q, spec.convention())?
        }
    };

    // 3. Recursion
    let out = arma_trend(data, &ar, &ma, spec.convention());
    let css = conditional_sum_of_squares(data, &out.trend, spec.warm_up());
    debug!(?ar, ?ma, css, "arma trend computed");

    Ok(ArmaFit::new(spec, ar, ma, out.trend, out.residuals, css))
}

/// Difference -> ARMA (residual convention) -> reconstruct.
#[tracing::instrument(skip(data, rng), fields(n = data.len()))]
pub(crate) fn fit_arima(
    spec: ArimaSpec,
    data: &[f64],
    rng: &mut impl Rng,
) -> Result<ArimaFit, ArimaError> {
    if data.is_empty() {
        return Err(ArimaError::InvalidParameter {
            reason: "input series is empty".to_string(),
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }

    let diffed = difference(data, spec.d())?;
    let arma_fit = fit_arma(spec.arma_spec(), &diffed, rng)?;
    let reconstructed = inverse_difference(data, arma_fit.fitted(), spec.d())?;
    debug!(
        n_diff = diffed.len(),
        n_reconstructed = reconstructed.len(),
        "arima reconstruction complete"
    );

    Ok(ArimaFit::new(spec, reconstructed, arma_fit))
}
