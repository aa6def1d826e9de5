//! TSV input sources and dataset parsing

pub mod directory;

use crate::error::{ConvertError, ConvertResult};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Ordered field names parsed from the first line of a TSV source
pub type Header = Vec<String>;

/// Tokens of one data line, in column order
pub type Record = Vec<String>;

/// A parsed TSV file: header plus data rows in source order.
///
/// Built fresh for each conversion and never mutated afterwards. Row shapes
/// are kept as read; reconciling short or long rows against the header
/// happens at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    pub header: Header,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(header: Header, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Number of data rows (the header does not count).
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of named columns.
    pub fn field_count(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Types of TSV input sources
#[derive(Debug, Clone)]
pub enum TsvSource {
    /// Raw TSV text
    String(String),
    /// Single TSV file path
    File(PathBuf),
    /// Directory containing multiple TSV files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl TsvSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            TsvSource::String(_) => "string input".to_string(),
            TsvSource::File(path) => format!("file: {}", path.display()),
            TsvSource::Directory(path) => format!("directory: {}", path.display()),
            TsvSource::Stdin => "standard input".to_string(),
        }
    }

    /// The filesystem path behind this source, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TsvSource::File(path) | TsvSource::Directory(path) => Some(path),
            TsvSource::String(_) | TsvSource::Stdin => None,
        }
    }

    /// Read the raw bytes of this source.
    pub fn read_bytes(&self) -> ConvertResult<Vec<u8>> {
        match self {
            TsvSource::String(content) => Ok(content.clone().into_bytes()),
            TsvSource::File(path) => {
                std::fs::read(path).map_err(|e| ConvertError::read_error(e, path))
            }
            TsvSource::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buffer)
                    .map_err(|e| ConvertError::Io {
                        message: format!("failed to read stdin: {}", e),
                        path: None,
                    })?;
                Ok(buffer)
            }
            TsvSource::Directory(path) => Err(ConvertError::configuration(format!(
                "cannot read directory {} as a single TSV source",
                path.display()
            ))),
        }
    }

    /// Parse this source into a dataset.
    pub fn parse(&self) -> ConvertResult<Dataset> {
        let bytes = self.read_bytes()?;
        parse_bytes(&bytes, self.path())
    }
}

/// Parse raw TSV bytes into a dataset.
///
/// The first record is the header; every following record is a data row.
/// The reader is flexible about row width, so short and long rows come back
/// as-is. Fully empty lines (including a trailing blank line at EOF) yield
/// no record. Invalid UTF-8 surfaces as a malformed-input error carrying the
/// offending line number.
pub fn parse_bytes(bytes: &[u8], path: Option<&Path>) -> ConvertResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = reader.records();

    let header: Header = match rows.next() {
        Some(row) => {
            let row = row.map_err(|e| ConvertError::from_csv(e, path))?;
            row.iter().map(str::to_owned).collect()
        }
        // An entirely empty source has no header and no records
        None => Vec::new(),
    };

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(|e| ConvertError::from_csv(e, path))?;
        records.push(row.iter().map(str::to_owned).collect());
    }

    Ok(Dataset::new(header, records))
}
