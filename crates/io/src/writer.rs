//! JSON report writer.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Serializes `value` to a pretty-printed JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, IoError> {
    serde_json::to_string_pretty(value).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Serializes `value` as pretty JSON and writes it to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    let json = to_json(value)?;
    std::fs::write(path, json).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        values: Vec<f64>,
    }

    #[test]
    fn to_json_is_pretty() {
        let json = to_json(&Sample {
            name: "ema",
            values: vec![1.0, 2.5],
        })
        .unwrap();
        assert!(json.contains("\"name\": \"ema\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn non_finite_floats_serialize_as_null() {
        let json = to_json(&Sample {
            name: "x",
            values: vec![f64::NAN],
        })
        .unwrap();
        assert!(json.contains("null"));
    }
}
