//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

use trendline_arima::{ArimaSpec, ArmaSpec, Estimator, MaConvention};
use trendline_io::{ReaderConfig, read_column};

use crate::config::{IoToml, ModelToml};

/// Parses an MA convention name into the corresponding enum variant.
pub fn parse_convention(s: &str) -> Result<MaConvention> {
    match s.to_lowercase().as_str() {
        "residual" => Ok(MaConvention::Residual),
        "detrended" => Ok(MaConvention::Detrended),
        other => bail!("unknown MA convention: {other:?}"),
    }
}

/// Parses an estimator name into the corresponding enum variant.
pub fn parse_estimator(s: &str) -> Result<Estimator> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "uniform" | "random" => Ok(Estimator::Uniform),
        "least_squares" | "css" => Ok(Estimator::LeastSquares),
        other => bail!("unknown estimator: {other:?}"),
    }
}

/// Canonical name of an MA convention, as written to reports.
pub fn convention_name(convention: MaConvention) -> &'static str {
    match convention {
        MaConvention::Residual => "residual",
        MaConvention::Detrended => "detrended",
    }
}

/// Canonical name of an estimator, as written to reports.
pub fn estimator_name(estimator: Estimator) -> &'static str {
    match estimator {
        Estimator::Uniform => "uniform",
        Estimator::LeastSquares => "least_squares",
    }
}

/// Builds an [`ArmaSpec`] from the `[model]` section. `d` is ignored.
pub fn build_arma_spec(model: &ModelToml) -> Result<ArmaSpec> {
    Ok(ArmaSpec::new(model.p, model.q)
        .with_convention(parse_convention(&model.convention)?)
        .with_estimator(parse_estimator(&model.estimator)?))
}

/// Builds an [`ArimaSpec`] from the `[model]` section. The convention is
/// fixed by the ARIMA pipeline, so `[model].convention` is ignored.
pub fn build_arima_spec(model: &ModelToml) -> Result<ArimaSpec> {
    Ok(ArimaSpec::new(model.p, model.d, model.q)
        .with_estimator(parse_estimator(&model.estimator)?))
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    if !io.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", io.delimiter);
    }
    let mut cfg = ReaderConfig::new().with_delimiter(io.delimiter as u8);
    if let Some(ref column) = io.column {
        cfg = cfg.with_column(column);
    }
    Ok(cfg)
}

/// Reads the configured input column.
pub fn read_series(io: &IoToml) -> Result<Vec<f64>> {
    let input = io
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))?;
    let reader_cfg = build_reader_config(io)?;
    let series = read_column(input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;
    if series.is_empty() {
        bail!("no numeric values in {}", input.display());
    }
    Ok(series)
}

/// Seeded RNG when a seed is configured, OS entropy otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
