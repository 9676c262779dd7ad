//! Fitted model results.

use crate::spec::{ArimaSpec, ArmaSpec};

/// An ARMA(p,q) trend produced by [`ArmaSpec::fit()`] or [`crate::arma()`].
///
/// Holds the coefficients that generated the trend, the trend itself (same
/// length as the input, zero during warm-up) and, for the residual
/// convention, the residuals recorded by the recursion.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmaFit {
    spec: ArmaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    trend: Vec<f64>,
    residuals: Option<Vec<f64>>,
    css: f64,
}

impl ArmaFit {
    pub(crate) fn new(
        spec: ArmaSpec,
        ar: Vec<f64>,
        ma: Vec<f64>,
        trend: Vec<f64>,
        residuals: Option<Vec<f64>>,
        css: f64,
    ) -> Self {
        Self {
            spec,
            ar,
            ma,
            trend,
            residuals,
            css,
        }
    }

    /// Returns the [`ArmaSpec`] that produced this fit.
    pub fn spec(&self) -> ArmaSpec {
        self.spec
    }

    /// Returns the `(p, q)` order.
    pub fn order(&self) -> (usize, usize) {
        (self.spec.p(), self.spec.q())
    }

    /// Returns the AR coefficients.
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients.
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the full trend, including the zeroed warm-up region.
    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    /// Returns the residuals recorded by the residual convention, or `None`
    /// for the detrended convention.
    pub fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    /// Number of leading trend positions left at zero (`max(p, q)`).
    pub fn warm_up(&self) -> usize {
        self.spec.warm_up()
    }

    /// Returns the trend after the warm-up region.
    pub fn fitted(&self) -> &[f64] {
        &self.trend[self.warm_up().min(self.trend.len())..]
    }

    /// Sum of squared differences between the data and the trend after the
    /// warm-up region.
    pub fn conditional_sum_of_squares(&self) -> f64 {
        self.css
    }

    /// Consumes the fit, returning `(trend, ar, ma)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.trend, self.ar, self.ma)
    }
}

/// An ARIMA(p,d,q) result produced by [`ArimaSpec::fit()`] or
/// [`crate::arima()`].
///
/// The reconstructed series starts with the first `d` original values and
/// has `n - max(p, q)` elements for an input of length `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArimaFit {
    spec: ArimaSpec,
    reconstructed: Vec<f64>,
    arma: ArmaFit,
}

impl ArimaFit {
    pub(crate) fn new(spec: ArimaSpec, reconstructed: Vec<f64>, arma: ArmaFit) -> Self {
        Self {
            spec,
            reconstructed,
            arma,
        }
    }

    /// Returns the [`ArimaSpec`] that produced this fit.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Returns the `(p, d, q)` order.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.spec.p(), self.spec.d(), self.spec.q())
    }

    /// Returns the series rebuilt from the differenced trend.
    pub fn reconstructed(&self) -> &[f64] {
        &self.reconstructed
    }

    /// Returns the AR coefficients.
    pub fn ar(&self) -> &[f64] {
        self.arma.ar()
    }

    /// Returns the MA coefficients.
    pub fn ma(&self) -> &[f64] {
        self.arma.ma()
    }

    /// Returns the ARMA fit on the differenced series.
    pub fn arma(&self) -> &ArmaFit {
        &self.arma
    }

    /// Consumes the fit, returning `(reconstructed, ar, ma)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let (_, ar, ma) = self.arma.into_parts();
        (self.reconstructed, ar, ma)
    }
}
