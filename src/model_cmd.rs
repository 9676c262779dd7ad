//! `arima` and `arma` commands: fit a trend to one CSV column and report it.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::{ArimaArgs, ArmaArgs};
use crate::config::TrendlineConfig;
use crate::convert;
use crate::report::{self, Metrics, ModelReport, Order};

/// Run the ARIMA pipeline.
pub fn run_arima(args: ArimaArgs) -> Result<()> {
    let _cmd = info_span!("arima").entered();
    let mut config = TrendlineConfig::load(args.common.config.as_deref())?;
    config.apply_common(&args.common);
    if let Some(p) = args.p {
        config.model.p = p;
    }
    if let Some(d) = args.d {
        config.model.d = d;
    }
    if let Some(q) = args.q {
        config.model.q = q;
    }
    if let Some(estimator) = args.estimator {
        config.model.estimator = estimator;
    }

    let data = convert::read_series(&config.io)?;
    let spec = convert::build_arima_spec(&config.model)?;
    let mut rng = convert::build_rng(config.seed);

    let fit = spec.fit(&data, &mut rng).with_context(|| {
        format!(
            "ARIMA({}, {}, {}) fit failed on {} observations",
            spec.p(),
            spec.d(),
            spec.q(),
            data.len()
        )
    })?;

    // The first d values are copied from the data, so they are left out.
    let d = spec.d();
    let metrics = Metrics::compare(&data[d..], &fit.reconstructed()[d..])?;
    info!(
        mse = metrics.mse,
        mae = metrics.mae,
        ar = ?fit.ar(),
        ma = ?fit.ma(),
        "ARIMA fitted"
    );

    let n_observations = data.len();
    let (series, ar_params, ma_params) = fit.into_parts();
    let report = ModelReport {
        command: "arima",
        order: Order {
            p: spec.p(),
            d: Some(d),
            q: spec.q(),
        },
        convention: convert::convention_name(spec.arma_spec().convention()),
        estimator: convert::estimator_name(spec.estimator()),
        seed: config.seed,
        n_observations,
        ar_params,
        ma_params,
        series,
        metrics,
    };
    report::emit(&report, config.io.output.as_deref())
}

/// Run a standalone ARMA fit.
pub fn run_arma(args: ArmaArgs) -> Result<()> {
    let _cmd = info_span!("arma").entered();
    let mut config = TrendlineConfig::load(args.common.config.as_deref())?;
    config.apply_common(&args.common);
    if let Some(p) = args.p {
        config.model.p = p;
    }
    if let Some(q) = args.q {
        config.model.q = q;
    }
    if let Some(convention) = args.convention {
        config.model.convention = convention;
    }
    if let Some(estimator) = args.estimator {
        config.model.estimator = estimator;
    }

    let data = convert::read_series(&config.io)?;
    let spec = convert::build_arma_spec(&config.model)?;
    let mut rng = convert::build_rng(config.seed);

    let fit = spec.fit(&data, &mut rng).with_context(|| {
        format!(
            "ARMA({}, {}) fit failed on {} observations",
            spec.p(),
            spec.q(),
            data.len()
        )
    })?;

    let warm_up = fit.warm_up();
    let metrics = Metrics::compare(&data[warm_up..], fit.fitted())?;
    info!(
        mse = metrics.mse,
        mae = metrics.mae,
        css = fit.conditional_sum_of_squares(),
        ar = ?fit.ar(),
        ma = ?fit.ma(),
        "ARMA fitted"
    );

    let n_observations = data.len();
    let (series, ar_params, ma_params) = fit.into_parts();
    let report = ModelReport {
        command: "arma",
        order: Order {
            p: spec.p(),
            d: None,
            q: spec.q(),
        },
        convention: convert::convention_name(spec.convention()),
        estimator: convert::estimator_name(spec.estimator()),
        seed: config.seed,
        n_observations,
        ar_params,
        ma_params,
        series,
        metrics,
    };
    report::emit(&report, config.io.output.as_deref())
}
