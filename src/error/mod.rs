//! Error types and handling infrastructure for TSV to JSON conversion

use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by the conversion process.
///
/// Nothing is caught or retried; every variant propagates to the process
/// boundary and produces a diagnostic on stderr with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("source file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    AccessDenied { path: PathBuf },

    #[error("malformed input: {message}")]
    MalformedInput { message: String, line: Option<u64> },

    #[error("failed to write {path}: {message}")]
    WriteFailure { message: String, path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvertError {
    pub fn malformed(message: String, line: Option<u64>) -> Self {
        Self::MalformedInput { message, line }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Classify an I/O error encountered while opening or reading a source.
    pub fn read_error(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::AccessDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => Self::MalformedInput {
                message: err.to_string(),
                line: None,
            },
            _ => Self::Io {
                message: err.to_string(),
                path: Some(path.to_path_buf()),
            },
        }
    }

    /// Classify an I/O error encountered while creating or writing the destination.
    pub fn write_error(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDenied {
                path: path.to_path_buf(),
            },
            _ => Self::WriteFailure {
                message: err.to_string(),
                path: path.to_path_buf(),
            },
        }
    }

    /// Classify a csv reader error, keeping the record position when available.
    pub fn from_csv(err: csv::Error, path: Option<&Path>) -> Self {
        let line = err.position().map(|pos| pos.line());
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => match path {
                Some(path) => Self::read_error(io_err, path),
                None => Self::Io {
                    message: io_err.to_string(),
                    path: None,
                },
            },
            csv::ErrorKind::Utf8 { err, .. } => Self::MalformedInput {
                message: format!("invalid UTF-8: {}", err),
                line,
            },
            other => Self::MalformedInput {
                message: format!("{:?}", other),
                line,
            },
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { path } => {
                format!("Source file not found: {}", path.display())
            }
            Self::AccessDenied { path } => {
                format!("Permission denied: {}", path.display())
            }
            Self::MalformedInput { message, line } => match line {
                Some(line) => format!("Malformed input at line {}: {}", line, message),
                None => format!("Malformed input: {}", message),
            },
            Self::WriteFailure { message, path } => {
                format!("Failed to write {}: {}", path.display(), message)
            }
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error on {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
