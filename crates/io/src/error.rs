//! Error types for trendline-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the trendline-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when an existing input file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Source path.
        path: PathBuf,
        /// Description of the I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV parser.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when the requested column is not in the header row.
    #[error("column '{name}' not found (available: {available})")]
    MissingColumn {
        /// Requested column name.
        name: String,
        /// Comma-separated header names.
        available: String,
    },

    /// Returned when a non-empty cell is not a number.
    #[error("row {row}: cannot parse '{value}' as a number")]
    Parse {
        /// 1-based data row (header excluded).
        row: usize,
        /// Offending cell content.
        value: String,
    },

    /// Returned when a report cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },

    /// Returned when an output file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Description of the I/O failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        Self::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = IoError::FileNotFound {
            path: PathBuf::from("/data/missing.csv"),
        };
        assert_eq!(e.to_string(), "file not found: /data/missing.csv");
    }

    #[test]
    fn missing_column_display() {
        let e = IoError::MissingColumn {
            name: "price".to_string(),
            available: "date, close".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "column 'price' not found (available: date, close)"
        );
    }

    #[test]
    fn parse_display() {
        let e = IoError::Parse {
            row: 4,
            value: "abc".to_string(),
        };
        assert_eq!(e.to_string(), "row 4: cannot parse 'abc' as a number");
    }

    #[test]
    fn read_display() {
        let e = IoError::Read {
            path: PathBuf::from("in.csv"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(e.to_string(), "failed to read in.csv: permission denied");
    }

    #[test]
    fn write_display() {
        let e = IoError::Write {
            path: PathBuf::from("out.json"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(e.to_string(), "failed to write out.json: permission denied");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
