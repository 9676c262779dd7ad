//! Model specifications (unfitted).

use rand::Rng;

use crate::error::ArimaError;
use crate::fit::{ArimaFit, ArmaFit};
use crate::params::Estimator;
use crate::recursion::MaConvention;

/// An unfitted ARMA(p,q) specification.
///
/// Create one with [`ArmaSpec::new()`], adjust it with the `with_*`
/// builders, then call [`ArmaSpec::fit()`] to obtain an [`ArmaFit`].
///
/// ```mermaid
/// graph LR
///     A["ArmaSpec::new(p, q)"] -->|".fit(&data, &mut rng)?"| B["ArmaFit"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmaSpec {
    p: usize,
    q: usize,
    convention: MaConvention,
    estimator: Estimator,
}

impl ArmaSpec {
    /// Creates an ARMA(p,q) specification with the detrended MA convention
    /// and uniform coefficient sampling.
    ///
    /// # Example
    ///
    /// ```
    /// use trendline_arima::{ArmaSpec, Estimator, MaConvention};
    ///
    /// let spec = ArmaSpec::new(2, 1);
    /// assert_eq!(spec.p(), 2);
    /// assert_eq!(spec.q(), 1);
    /// assert_eq!(spec.convention(), MaConvention::Detrended);
    /// assert_eq!(spec.estimator(), Estimator::Uniform);
    /// ```
    pub fn new(p: usize, q: usize) -> Self {
        Self {
            p,
            q,
            convention: MaConvention::default(),
            estimator: Estimator::default(),
        }
    }

    /// Sets the MA convention.
    pub fn with_convention(mut self, convention: MaConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the coefficient estimator.
    pub fn with_estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the MA convention.
    pub fn convention(&self) -> MaConvention {
        self.convention
    }

    /// Returns the coefficient estimator.
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Length of the zeroed warm-up region, `max(p, q)`.
    pub fn warm_up(&self) -> usize {
        self.p.max(self.q)
    }

    /// Computes the recursive ARMA trend of `data`.
    ///
    /// With [`Estimator::Uniform`] the AR coefficients are drawn from `rng`
    /// first, then the MA coefficients. [`Estimator::LeastSquares`] does
    /// not consume `rng`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidParameter`] | `data` is empty |
    /// | [`ArimaError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ArimaError::InsufficientData`] | `data.len() < max(p, q) + 1` |
    /// | [`ArimaError::OptimizationFailed`] | least-squares search fails |
    pub fn fit(&self, data: &[f64], rng: &mut impl Rng) -> Result<ArmaFit, ArimaError> {
        crate::model::fit_arma(*self, data, rng)
    }
}

/// An unfitted ARIMA(p,d,q) specification.
///
/// The ARMA step always uses [`MaConvention::Residual`].
///
/// ```mermaid
/// graph LR
///     A["difference(d)"] --> B["ARMA(p,q), residual convention"]
///     B --> C["inverse_difference(d)"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArimaSpec {
    p: usize,
    d: usize,
    q: usize,
    estimator: Estimator,
}

impl ArimaSpec {
    /// Creates an ARIMA(p,d,q) specification with uniform coefficient
    /// sampling.
    ///
    /// # Example
    ///
    /// ```
    /// use trendline_arima::ArimaSpec;
    ///
    /// let spec = ArimaSpec::new(2, 1, 2);
    /// assert_eq!(spec.d(), 1);
    /// assert_eq!(spec.arma_spec().warm_up(), 2);
    /// ```
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            p,
            d,
            q,
            estimator: Estimator::default(),
        }
    }

    /// Sets the coefficient estimator.
    pub fn with_estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing order (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the coefficient estimator.
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// The ARMA specification applied to the differenced series.
    pub fn arma_spec(&self) -> ArmaSpec {
        ArmaSpec::new(self.p, self.q)
            .with_convention(MaConvention::Residual)
            .with_estimator(self.estimator)
    }

    /// Differences `data`, fits the ARMA trend and rebuilds the level series.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::InvalidParameter`] | `data` is empty |
    /// | [`ArimaError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ArimaError::InsufficientData`] | `data.len() <= d` with `d > 0`, or the differenced series is shorter than `max(p, q) + 1` |
    /// | [`ArimaError::OptimizationFailed`] | least-squares search fails |
    pub fn fit(&self, data: &[f64], rng: &mut impl Rng) -> Result<ArimaFit, ArimaError> {
        crate::model::fit_arima(*self, data, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arma_spec_defaults() {
        let spec = ArmaSpec::new(2, 1);
        assert_eq!(spec.p(), 2);
        assert_eq!(spec.q(), 1);
        assert_eq!(spec.convention(), MaConvention::Detrended);
        assert_eq!(spec.estimator(), Estimator::Uniform);
        assert_eq!(spec.warm_up(), 2);
    }

    #[test]
    fn arma_spec_builders() {
        let spec = ArmaSpec::new(0, 3)
            .with_convention(MaConvention::Residual)
            .with_estimator(Estimator::LeastSquares);
        assert_eq!(spec.convention(), MaConvention::Residual);
        assert_eq!(spec.estimator(), Estimator::LeastSquares);
        assert_eq!(spec.warm_up(), 3);
    }

    #[test]
    fn arma_spec_is_copy() {
        let a = ArmaSpec::new(1, 1);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, a.with_convention(MaConvention::Residual));
    }

    #[test]
    fn arima_spec_accessors() {
        let spec = ArimaSpec::new(2, 1, 3);
        assert_eq!((spec.p(), spec.d(), spec.q()), (2, 1, 3));
        assert_eq!(spec.estimator(), Estimator::Uniform);
    }

    #[test]
    fn arima_spec_uses_residual_convention() {
        let arma = ArimaSpec::new(1, 1, 1)
            .with_estimator(Estimator::LeastSquares)
            .arma_spec();
        assert_eq!(arma.convention(), MaConvention::Residual);
        assert_eq!(arma.estimator(), Estimator::LeastSquares);
        assert_eq!((arma.p(), arma.q()), (1, 1));
    }

    #[test]
    fn spec_debug_format() {
        assert!(format!("{:?}", ArmaSpec::new(1, 2)).contains("ArmaSpec"));
        assert!(format!("{:?}", ArimaSpec::new(1, 1, 2)).contains("ArimaSpec"));
    }
}
