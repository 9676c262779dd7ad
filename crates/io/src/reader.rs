//! CSV column reader.

use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;

/// Configuration for reading a numeric column.
///
/// # Example
///
/// ```
/// use trendline_io::ReaderConfig;
///
/// let config = ReaderConfig::new().with_column("close").with_delimiter(b';');
/// assert_eq!(config.column(), Some("close"));
/// assert_eq!(config.delimiter(), b';');
/// ```
#[derive(Clone, Debug)]
pub struct ReaderConfig {
    column: Option<String>,
    delimiter: u8,
}

impl ReaderConfig {
    /// Reads the first column of a comma-separated file.
    pub fn new() -> Self {
        Self {
            column: None,
            delimiter: b',',
        }
    }

    /// Selects the column by header name.
    pub fn with_column(mut self, name: impl Into<String>) -> Self {
        self.column = Some(name.into());
        self
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the selected column name, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads one numeric column from a CSV file with a header row.
///
/// Empty cells and `NaN` cells are dropped, so the returned series has no
/// gaps. Any other cell that does not parse as `f64` is an error.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Read`] | `path` exists but cannot be read (permissions, a directory) |
/// | [`IoError::MissingColumn`] | the configured column is not in the header |
/// | [`IoError::Parse`] | a non-empty cell is not a number |
/// | [`IoError::Csv`] | the file is not valid CSV |
pub fn read_column(path: &Path, config: &ReaderConfig) -> Result<Vec<f64>, IoError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;
    let values = read_column_from(bytes.as_slice(), config)?;
    info!(path = %path.display(), n = values.len(), "column loaded");
    Ok(values)
}

/// Reads one numeric column from any CSV source with a header row.
///
/// Same rules as [`read_column`].
pub fn read_column_from<R: Read>(source: R, config: &ReaderConfig) -> Result<Vec<f64>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let index = match config.column() {
        Some(name) => headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                available: headers.iter().collect::<Vec<_>>().join(", "),
            })?,
        None => 0,
    };

    let mut values = Vec::new();
    let mut dropped = 0usize;
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record.get(index).unwrap_or("");
        if cell.is_empty() {
            dropped += 1;
            continue;
        }
        let value: f64 = cell.parse().map_err(|_| IoError::Parse {
            row: i + 1,
            value: cell.to_string(),
        })?;
        if value.is_nan() {
            dropped += 1;
            continue;
        }
        values.push(value);
    }

    if dropped > 0 {
        debug!(dropped, "dropped missing cells");
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, config: &ReaderConfig) -> Result<Vec<f64>, IoError> {
        read_column_from(text.as_bytes(), config)
    }

    #[test]
    fn first_column_by_default() {
        let values = read("a,b\n1,10\n2,20\n", &ReaderConfig::new()).unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn named_column() {
        let config = ReaderConfig::new().with_column("b");
        let values = read("a,b\n1,10\n2,20.5\n", &config).unwrap();
        assert_eq!(values, vec![10.0, 20.5]);
    }

    #[test]
    fn drops_empty_and_nan_cells() {
        let config = ReaderConfig::new().with_column("data");
        let values = read("data,x\n1,a\n,b\nNaN,c\n4,d\n", &config).unwrap();
        assert_eq!(values, vec![1.0, 4.0]);
    }

    #[test]
    fn short_rows_count_as_missing() {
        let config = ReaderConfig::new().with_column("b");
        let values = read("a,b\n1,2\n3\n5,6\n", &config).unwrap();
        assert_eq!(values, vec![2.0, 6.0]);
    }

    #[test]
    fn trims_whitespace() {
        let values = read("v\n  1.5 \n 2\n", &ReaderConfig::new()).unwrap();
        assert_eq!(values, vec![1.5, 2.0]);
    }

    #[test]
    fn custom_delimiter() {
        let config = ReaderConfig::new().with_delimiter(b';').with_column("y");
        let values = read("x;y\n1;3\n2;4\n", &config).unwrap();
        assert_eq!(values, vec![3.0, 4.0]);
    }

    #[test]
    fn missing_column() {
        let config = ReaderConfig::new().with_column("price");
        let err = read("date,close\n1,2\n", &config).unwrap_err();
        match err {
            IoError::MissingColumn { name, available } => {
                assert_eq!(name, "price");
                assert_eq!(available, "date, close");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_cell() {
        let err = read("v\n1\noops\n", &ReaderConfig::new()).unwrap_err();
        assert!(matches!(err, IoError::Parse { row: 2, .. }), "got {err:?}");
    }

    #[test]
    fn header_only() {
        assert!(read("v\n", &ReaderConfig::new()).unwrap().is_empty());
    }
}
