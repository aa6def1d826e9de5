//! TSV to JSON Converter
//!
//! A Rust CLI tool for converting tab-separated-values files, whose first
//! line is a header row, into JSON arrays of records.

pub mod cli;
pub mod convert;
pub mod error;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use convert::{convert_tsv_to_json, ConversionEngine, ConvertConfig, JsonData};
pub use error::{ConvertError, ConvertResult};
pub use reader::{Dataset, TsvSource};

use std::path::Path;

/// Convert a TSV file into a JSON file with default configuration
pub fn convert_file(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
) -> ConvertResult<JsonData> {
    let engine = ConversionEngine::new(ConvertConfig::default());
    engine.convert_file(source.as_ref(), dest.as_ref())
}

/// Convert TSV text to JSON text with default configuration
pub fn convert_str(tsv: &str) -> ConvertResult<String> {
    let engine = ConversionEngine::new(ConvertConfig::default());
    Ok(engine.convert_str(tsv)?.content)
}
