//! `ema` and `wma` commands.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use trendline_smooth::{ema, ema_normalized, wma};

use crate::cli::{EmaArgs, WmaArgs};
use crate::config::TrendlineConfig;
use crate::convert;
use crate::report::{self, Metrics, SmoothReport};

/// Run the exponential moving average.
pub fn run_ema(args: EmaArgs) -> Result<()> {
    let _cmd = info_span!("ema").entered();
    let mut config = TrendlineConfig::load(args.common.config.as_deref())?;
    config.apply_common(&args.common);
    if let Some(alpha) = args.alpha {
        config.smooth.alpha = alpha;
    }

    let data = convert::read_series(&config.io)?;
    let alpha = config.smooth.alpha;
    let series = if args.normalized {
        ema_normalized(&data, alpha)
    } else {
        ema(&data, alpha)
    }
    .with_context(|| format!("EMA failed with alpha = {alpha}"))?;

    let metrics = Metrics::compare(&data, &series)?;
    info!(mse = metrics.mse, mae = metrics.mae, alpha, "EMA computed");

    let report = SmoothReport {
        command: "ema",
        alpha: Some(alpha),
        normalized: args.normalized,
        weights: None,
        n_observations: data.len(),
        series,
        metrics,
    };
    report::emit(&report, config.io.output.as_deref())
}

/// Run the weighted moving average.
pub fn run_wma(args: WmaArgs) -> Result<()> {
    let _cmd = info_span!("wma").entered();
    let mut config = TrendlineConfig::load(args.common.config.as_deref())?;
    config.apply_common(&args.common);
    if let Some(weights) = args.weights {
        config.smooth.weights = weights;
    }

    let data = convert::read_series(&config.io)?;
    let weights = config.smooth.weights;
    let series = wma(&data, &weights)
        .with_context(|| format!("WMA failed with {} weights", weights.len()))?;

    // Output i covers data[i..i + w]; compare it with the newest value of its window.
    let metrics = Metrics::compare(&data[weights.len() - 1..], &series)?;
    info!(mse = metrics.mse, mae = metrics.mae, window = weights.len(), "WMA computed");

    let report = SmoothReport {
        command: "wma",
        alpha: None,
        normalized: false,
        weights: Some(weights),
        n_observations: data.len(),
        series,
        metrics,
    };
    report::emit(&report, config.io.output.as_deref())
}
