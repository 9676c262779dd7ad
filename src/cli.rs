use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trend extraction and smoothing for univariate series.
#[derive(Parser)]
#[command(
    name = "trendline",
    version,
    about = "ARIMA/ARMA trends and moving averages for a CSV column"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Difference, fit an ARMA trend, and rebuild the level series.
    Arima(ArimaArgs),
    /// Fit a recursive ARMA trend.
    Arma(ArmaArgs),
    /// Exponential moving average.
    Ema(EmaArgs),
    /// Weighted moving average.
    Wma(WmaArgs),
}

/// Arguments shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input CSV file; overrides [io].input.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Column header to read; overrides [io].column.
    #[arg(long)]
    pub column: Option<String>,

    /// Path for the JSON report; printed to stdout when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RNG seed; overrides the config seed.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `arima` subcommand.
#[derive(clap::Args)]
pub struct ArimaArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// AR order; overrides [model].p.
    #[arg(short = 'p', long = "ar-order")]
    pub p: Option<usize>,

    /// Differencing order; overrides [model].d.
    #[arg(short = 'd', long = "diff-order")]
    pub d: Option<usize>,

    /// MA order; overrides [model].q.
    #[arg(short = 'q', long = "ma-order")]
    pub q: Option<usize>,

    /// Coefficient estimator: "uniform" or "least_squares".
    #[arg(long)]
    pub estimator: Option<String>,
}

/// Arguments for the `arma` subcommand.
#[derive(clap::Args)]
pub struct ArmaArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// AR order; overrides [model].p.
    #[arg(short = 'p', long = "ar-order")]
    pub p: Option<usize>,

    /// MA order; overrides [model].q.
    #[arg(short = 'q', long = "ma-order")]
    pub q: Option<usize>,

    /// MA convention: "detrended" or "residual".
    #[arg(long)]
    pub convention: Option<String>,

    /// Coefficient estimator: "uniform" or "least_squares".
    #[arg(long)]
    pub estimator: Option<String>,
}

/// Arguments for the `ema` subcommand.
#[derive(clap::Args)]
pub struct EmaArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Smoothing factor in (0, 1]; overrides [smooth].alpha.
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Divide by the sum of decayed weights instead of recursing.
    #[arg(long)]
    pub normalized: bool,
}

/// Arguments for the `wma` subcommand.
#[derive(clap::Args)]
pub struct WmaArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Comma-separated window weights, oldest first; overrides [smooth].weights.
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub weights: Option<Vec<f64>>,
}
