use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::CommonArgs;

/// Top-level trendline configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TrendlineConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Input/output settings.
    #[serde(default)]
    pub io: IoToml,

    /// ARIMA/ARMA settings.
    #[serde(default)]
    pub model: ModelToml,

    /// EMA/WMA settings.
    #[serde(default)]
    pub smooth: SmoothToml,
}

impl TrendlineConfig {
    /// Loads the TOML file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Applies the flags shared by every subcommand. CLI values win.
    pub fn apply_common(&mut self, args: &CommonArgs) {
        if let Some(ref input) = args.input {
            self.io.input = Some(input.clone());
        }
        if let Some(ref column) = args.column {
            self.io.column = Some(column.clone());
        }
        if let Some(ref output) = args.output {
            self.io.output = Some(output.clone());
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub column: Option<String>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            column: None,
            output: None,
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_p")]
    pub p: usize,
    #[serde(default = "default_d")]
    pub d: usize,
    #[serde(default = "default_q")]
    pub q: usize,
    #[serde(default = "default_convention")]
    pub convention: String,
    #[serde(default = "default_estimator")]
    pub estimator: String,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            p: default_p(),
            d: default_d(),
            q: default_q(),
            convention: default_convention(),
            estimator: default_estimator(),
        }
    }
}

fn default_p() -> usize {
    2
}
fn default_d() -> usize {
    1
}
fn default_q() -> usize {
    2
}
fn default_convention() -> String {
    "detrended".to_string()
}
fn default_estimator() -> String {
    "uniform".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothToml {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_weights")]
    pub weights: Vec<f64>,
}

impl Default for SmoothToml {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            weights: default_weights(),
        }
    }
}

fn default_alpha() -> f64 {
    0.2
}
fn default_weights() -> Vec<f64> {
    vec![0.1, 0.3, 0.6]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TrendlineConfig = toml::from_str("").unwrap();
        assert!(config.seed.is_none());
        assert_eq!((config.model.p, config.model.d, config.model.q), (2, 1, 2));
        assert_eq!(config.model.convention, "detrended");
        assert_eq!(config.model.estimator, "uniform");
        assert_eq!(config.smooth.alpha, 0.2);
        assert_eq!(config.smooth.weights, vec![0.1, 0.3, 0.6]);
        assert_eq!(config.io.delimiter, ',');
    }

    #[test]
    fn full_toml() {
        let config: TrendlineConfig = toml::from_str(
            r#"
            seed = 7
            [io]
            input = "data.csv"
            column = "close"
            output = "out.json"
            delimiter = ";"
            [model]
            p = 1
            d = 0
            q = 3
            convention = "residual"
            estimator = "least_squares"
            [smooth]
            alpha = 0.5
            weights = [1.0, 2.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.io.input, Some(PathBuf::from("data.csv")));
        assert_eq!(config.io.column.as_deref(), Some("close"));
        assert_eq!(config.io.delimiter, ';');
        assert_eq!((config.model.p, config.model.d, config.model.q), (1, 0, 3));
        assert_eq!(config.model.convention, "residual");
        assert_eq!(config.smooth.weights, vec![1.0, 2.0]);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<TrendlineConfig, _> = toml::from_str("[model]\norder = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = TrendlineConfig::default();
        config.seed = Some(1);
        config.io.column = Some("a".to_string());
        let args = CommonArgs {
            config: None,
            input: Some(PathBuf::from("x.csv")),
            column: None,
            output: None,
            seed: Some(9),
        };
        config.apply_common(&args);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.io.input, Some(PathBuf::from("x.csv")));
        assert_eq!(config.io.column.as_deref(), Some("a"));
    }

    #[test]
    fn load_without_path_uses_defaults() {
        let config = TrendlineConfig::load(None).unwrap();
        assert_eq!(config.model.p, 2);
    }
}
