//! # trendline-io
//!
//! Reads one numeric column from CSV input and writes serializable reports
//! as JSON. Bridges files into the `&[f64]` slices the model crates take.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_column, read_column_from};
pub use writer::{to_json, write_json};
