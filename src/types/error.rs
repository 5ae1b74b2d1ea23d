//! Error types for the CSV codec
//!
//! The reader and writer only ever fail because the underlying stream failed.
//! Malformed quoting is absorbed by the parser and never becomes an error.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, invalid UTF-8, etc.
//! - **CSV Parsing Errors**: Raised by the `csv`-backed standard strategy only
//! - **Configuration Errors**: Dialects that cannot be parsed unambiguously

use std::io;
use thiserror::Error;

/// Main error type for the codec and the benchmark harness
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// The underlying stream failed while reading or writing
    ///
    /// Undecodable input bytes are reported here with kind `InvalidData`.
    #[error("I/O error: {message}")]
    Io {
        /// Kind of the original `io::Error`
        kind: io::ErrorKind,
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error reported by the `csv` crate
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Delimiter and quote character cannot be used together
    #[error("Invalid dialect: {reason}")]
    InvalidDialect {
        /// Why the dialect was rejected
        reason: String,
    },

    /// The `csv` crate only supports single-byte delimiter and quote characters
    #[error("Dialect (delimiter {delimiter:?}, quotechar {quotechar:?}) is not ASCII")]
    NonAsciiDialect { delimiter: char, quotechar: char },
}

impl From<io::Error> for CsvError {
    fn from(error: io::Error) -> Self {
        CsvError::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for CsvError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());
        let message = error.to_string();

        match error.into_kind() {
            csv::ErrorKind::Io(io_error) => io_error.into(),
            _ => CsvError::Parse { line, message },
        }
    }
}

impl CsvError {
    /// Build an error for a path that could not be opened
    ///
    /// `NotFound` becomes [`CsvError::FileNotFound`]; anything else keeps the
    /// path in the I/O message.
    pub fn open_failed(path: &std::path::Path, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            CsvError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            CsvError::Io {
                kind: error.kind(),
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create an InvalidDialect error
    pub fn invalid_dialect(reason: &str) -> Self {
        CsvError::InvalidDialect {
            reason: reason.to_string(),
        }
    }
}
