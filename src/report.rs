//! JSON reports emitted by every subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Fit quality of a trend or smoothed series against the observations.
#[derive(Debug, Serialize, PartialEq)]
pub struct Metrics {
    pub n_compared: usize,
    pub mse: f64,
    pub mae: f64,
    pub rmse: f64,
    /// Mean of `observed - predicted`; non-zero means the fit is biased.
    pub error_mean: f64,
    /// Sample standard deviation of `observed - predicted`.
    pub error_sd: f64,
}

impl Metrics {
    /// Compares the common prefix of `observed` and `predicted`.
    pub fn compare(observed: &[f64], predicted: &[f64]) -> Result<Self> {
        let n = observed.len().min(predicted.len());
        let (observed, predicted) = (&observed[..n], &predicted[..n]);
        let errors: Vec<f64> = observed.iter().zip(predicted).map(|(o, p)| o - p).collect();
        Ok(Self {
            n_compared: n,
            mse: trendline_stats::mse(observed, predicted).context("failed to compute MSE")?,
            mae: trendline_stats::mae(observed, predicted).context("failed to compute MAE")?,
            rmse: trendline_stats::rmse(observed, predicted).context("failed to compute RMSE")?,
            error_mean: trendline_stats::mean(&errors),
            error_sd: trendline_stats::sd(&errors),
        })
    }
}

/// Model order. `d` is only present for ARIMA.
#[derive(Debug, Serialize)]
pub struct Order {
    pub p: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<usize>,
    pub q: usize,
}

/// Report for the `arima` and `arma` subcommands.
#[derive(Debug, Serialize)]
pub struct ModelReport {
    pub command: &'static str,
    pub order: Order,
    pub convention: &'static str,
    pub estimator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub n_observations: usize,
    pub ar_params: Vec<f64>,
    pub ma_params: Vec<f64>,
    pub series: Vec<f64>,
    pub metrics: Metrics,
}

/// Report for the `ema` and `wma` subcommands.
#[derive(Debug, Serialize)]
pub struct SmoothReport {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub normalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    pub n_observations: usize,
    pub series: Vec<f64>,
    pub metrics: Metrics,
}

/// Writes `report` to `output` as pretty JSON, or prints it to stdout.
pub fn emit<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => trendline_io::write_json(path, report)
            .with_context(|| format!("failed to write report: {}", path.display())),
        None => {
            let json = trendline_io::to_json(report).context("failed to serialize report")?;
            println!("{json}");
            info!("report printed to stdout");
            Ok(())
        }
    }
}
