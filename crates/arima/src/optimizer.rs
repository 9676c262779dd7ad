//! Nelder-Mead conditional-sum-of-squares estimation.
//!
//! Wraps the `argmin` crate to minimise the squared one-step errors of the
//! recursive trend over unconstrained parameters.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use tracing::{debug, warn};

use crate::error::ArimaError;
use crate::params;
use crate::recursion::{MaConvention, arma_trend, conditional_sum_of_squares};

/// Estimates `(ar, ma)` by minimising the conditional sum of squares.
///
/// The caller has already validated `data` against the orders.
pub(crate) fn fit_least_squares(
    data: &[f64],
    p: usize,
    q: usize,
    convention: MaConvention,
) -> Result<(Vec<f64>, Vec<f64>), ArimaError> {
    let dim = p + q;
    if dim == 0 {
        return Ok((Vec::new(), Vec::new()));
    }

    // Simplex: origin plus one step along each axis
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(vec![0.0; dim]);
    for i in 0..dim {
        let mut vertex = vec![0.0; dim];
        vertex[i] = 0.5;
        simplex.push(vertex);
    }

    let cost = CssCost {
        data,
        p,
        q,
        convention,
    };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(1e-8)
        .map_err(|_| ArimaError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(1000))
        .run()
        .map_err(|_| ArimaError::OptimizationFailed)?;

    let best_cost = result.state().best_cost;
    if !best_cost.is_finite() || best_cost == f64::MAX {
        warn!(best_cost, "least-squares search found no finite cost");
        return Err(ArimaError::OptimizationFailed);
    }
    let best_params = result
        .state()
        .best_param
        .as_ref()
        .ok_or(ArimaError::OptimizationFailed)?;

    let (alpha, beta) = best_params.split_at(p);
    let ar = params::unconstrained_to_coeffs(alpha);
    let ma = params::unconstrained_to_coeffs(beta);
    debug!(?ar, ?ma, css = best_cost, "least-squares coefficients");
    Ok((ar, ma))
}

/// Cost function for argmin: conditional sum of squares of the recursion.
struct CssCost<'a> {
    data: &'a [f64],
    p: usize,
    q: usize,
    convention: MaConvention,
}

impl CostFunction for CssCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let (alpha, beta) = params.split_at(self.p);
        let ar = params::unconstrained_to_coeffs(alpha);
        let ma = params::unconstrained_to_coeffs(beta);
        let out = arma_trend(self.data, &ar, &ma, self.convention);
        let css = conditional_sum_of_squares(self.data, &out.trend, self.p.max(self.q));
        if css.is_finite() {
            Ok(css)
        } else {
            Ok(f64::MAX)
        }
    }
}
