//! Core conversion engine for TSV to JSON transformation

use crate::convert::config::ConvertConfig;
use crate::error::ConvertResult;
use crate::reader::{parse_bytes, Dataset, TsvSource};
use crate::writer;
use std::path::Path;
use std::time::Instant;

/// Core conversion result
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered JSON output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub record_count: usize,
    pub field_count: usize,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConvertConfig,
}

impl ConversionEngine {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Convert an already-parsed dataset to JSON.
    pub fn convert_dataset(&self, dataset: &Dataset) -> ConvertResult<JsonData> {
        let start = Instant::now();
        let content = writer::render(dataset, &self.config)?;
        let metadata = self.metadata_for(dataset, estimate_input_size(dataset), &content, start);
        Ok(JsonData::new(content, metadata))
    }

    /// Read, parse, and convert a TSV source in one pass.
    pub fn convert_from_source(&self, source: &TsvSource) -> ConvertResult<JsonData> {
        let start = Instant::now();
        let bytes = source.read_bytes()?;
        let dataset = parse_bytes(&bytes, source.path())?;
        let content = writer::render(&dataset, &self.config)?;
        let metadata = self.metadata_for(&dataset, bytes.len() as u64, &content, start);
        Ok(JsonData::new(content, metadata))
    }

    /// Convert raw TSV text to JSON.
    pub fn convert_str(&self, tsv: &str) -> ConvertResult<JsonData> {
        self.convert_from_source(&TsvSource::String(tsv.to_string()))
    }

    /// Convert a TSV file into a JSON file.
    ///
    /// The destination is truncated if it exists and created if absent. On
    /// failure before the write, the destination is left untouched.
    pub fn convert_file(&self, input: &Path, output: &Path) -> ConvertResult<JsonData> {
        let data = self.convert_from_source(&TsvSource::File(input.to_path_buf()))?;
        writer::write_json(output, data.as_str())?;
        Ok(data)
    }

    fn metadata_for(
        &self,
        dataset: &Dataset,
        input_size: u64,
        content: &str,
        start: Instant,
    ) -> ConversionMetadata {
        ConversionMetadata {
            input_size,
            output_size: content.len() as u64,
            record_count: dataset.record_count(),
            field_count: dataset.field_count(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Approximate source size for datasets built without a byte source.
fn estimate_input_size(dataset: &Dataset) -> u64 {
    let header: usize = dataset.header.iter().map(|h| h.len() + 1).sum();
    let records: usize = dataset
        .records
        .iter()
        .map(|r| r.iter().map(|f| f.len() + 1).sum::<usize>())
        .sum();
    (header + records) as u64
}

/// Convert a dataset to JSON with the given configuration
pub fn convert_tsv_to_json(dataset: &Dataset, config: &ConvertConfig) -> ConvertResult<JsonData> {
    let engine = ConversionEngine::new(*config);
    engine.convert_dataset(dataset)
}

/// Convert a TSV source to JSON with the given configuration
pub fn convert_from_source(source: &TsvSource, config: &ConvertConfig) -> ConvertResult<JsonData> {
    let engine = ConversionEngine::new(*config);
    engine.convert_from_source(source)
}
