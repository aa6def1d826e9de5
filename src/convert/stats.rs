//! Statistics tracking for conversion runs

use crate::convert::engine::ConversionMetadata;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one or more conversion operations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Input TSV size in bytes
    pub input_size_bytes: u64,
    /// Output JSON size in bytes
    pub output_size_bytes: u64,
    /// Number of records converted
    pub record_count: usize,
    /// Number of files processed
    pub file_count: usize,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
    /// Average time per file
    pub avg_time_per_file_ms: f32,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion
    pub fn for_conversion(metadata: &ConversionMetadata) -> Self {
        Self {
            input_size_bytes: metadata.input_size,
            output_size_bytes: metadata.output_size,
            record_count: metadata.record_count,
            file_count: 1,
            processing_time_ms: metadata.processing_time_ms,
            avg_time_per_file_ms: metadata.processing_time_ms as f32,
        }
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.record_count += other.record_count;
        self.file_count += other.file_count;
        self.processing_time_ms += other.processing_time_ms;

        self.avg_time_per_file_ms = if self.file_count > 0 {
            self.processing_time_ms as f32 / self.file_count as f32
        } else {
            0.0
        };
    }

    /// Render a human-readable report for --stats output
    pub fn report(&self) -> String {
        let mut lines = vec![
            "Conversion Statistics:".to_string(),
            format!("Input size: {} bytes", self.input_size_bytes),
            format!("Output size: {} bytes", self.output_size_bytes),
            format!("Records: {}", self.record_count),
            format!("Processing time: {}ms", self.processing_time_ms),
        ];

        if self.file_count > 1 {
            lines.push(format!("Files: {}", self.file_count));
            lines.push(format!(
                "Average time per file: {:.1}ms",
                self.avg_time_per_file_ms
            ));
        }

        lines.join("\n")
    }
}
