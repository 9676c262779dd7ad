//! # trendline-arima
//!
//! Differencing, recursive ARMA trends and ARIMA reconstruction.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["difference(data, d)"] --> B["ArmaSpec::fit (residual convention)"]
//!     B -->|"trend[max(p,q)..]"| C["inverse_difference(data, ., d)"]
//!     C --> D["ArimaFit"]
//! ```
//!
//! ## Two Usage Paths
//!
//! **Free functions**:
//! ```ignore
//! let fit = arima(&data, 2, 1, 2, &mut rng)?;
//! let (reconstructed, ar, ma) = fit.into_parts();
//! ```
//!
//! **Specifications** (to choose the MA convention or estimator):
//! ```ignore
//! let fit = ArmaSpec::new(2, 2)
//!     .with_convention(MaConvention::Residual)
//!     .with_estimator(Estimator::LeastSquares)
//!     .fit(&data, &mut rng)?;
//! ```
//!
//! Coefficients are drawn uniformly from `[-0.5, 0.5)` by default, so the
//! caller's RNG decides the result; seed it for reproducible output.
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArmaFit::ar()`] | AR coefficients: weights on past observations |
//! | theta | [`ArmaFit::ma()`] | MA coefficients: weights on past errors |
//! | warm-up | [`ArmaFit::warm_up()`] | leading `max(p, q)` trend positions left at zero |

mod diff;
mod error;
mod fit;
mod model;
mod params;
mod recursion;
mod spec;

pub(crate) mod optimizer;

pub use diff::{difference, inverse_difference};
pub use error::ArimaError;
pub use fit::{ArimaFit, ArmaFit};
pub use model::{arima, arma};
pub use params::Estimator;
pub use recursion::{MaConvention, Recursion, arma_trend};
pub use spec::{ArimaSpec, ArmaSpec};
