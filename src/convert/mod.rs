//! TSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration, and statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::ConvertConfig;
pub use engine::{convert_from_source, convert_tsv_to_json, ConversionEngine, JsonData};
pub use stats::RunStatistics;
