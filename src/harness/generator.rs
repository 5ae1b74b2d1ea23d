//! Benchmark test-data generator
//!
//! Produces a CSV file whose every data row exercises the quoting edge cases:
//! an embedded quote, embedded delimiters and an embedded newline.

use crate::types::{CsvError, Dialect};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::path::PathBuf;

/// Settings for [`generate_test_data`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// File to create
    pub path: PathBuf,
    /// Number of data rows written after the header
    pub row_count: usize,
    /// Dialect of the generated file
    pub dialect: Dialect,
}

impl GeneratorConfig {
    pub fn new(path: impl Into<PathBuf>, row_count: usize, dialect: Dialect) -> Self {
        Self {
            path: path.into(),
            row_count,
            dialect,
        }
    }
}

/// Result of a [`generate_test_data`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The file already existed and was left untouched
    Skipped,
    /// The file was written with this many data rows
    Generated { rows: usize },
}

/// One generated data row; field names become the header row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedRecord {
    #[serde(rename = "ID")]
    pub id: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Quoted_Field")]
    pub quoted_field: String,
    #[serde(rename = "Comma_Field")]
    pub comma_field: String,
    #[serde(rename = "Newline_Field")]
    pub newline_field: String,
}

impl GeneratedRecord {
    /// Build the record for 1-based row `id`
    pub fn for_row(id: usize) -> Self {
        Self {
            id,
            name: format!("User_{}", id),
            quoted_field: "A value with an internal \"quote\" (will be written as \"\"\"\").".to_string(),
            comma_field: format!("Data, with, commas, in row {}", id),
            newline_field: format!("Line 1 for {}\nLine 2", id),
        }
    }
}

/// Header row matching [`GeneratedRecord`]'s serialized field names
pub const HEADER: [&str; 5] = ["ID", "Name", "Quoted_Field", "Comma_Field", "Newline_Field"];

/// Write the benchmark data file unless it already exists
///
/// # Errors
///
/// Returns [`CsvError::NonAsciiDialect`] for dialects the `csv` crate cannot
/// write, or an I/O error if the file cannot be created or written.
pub fn generate_test_data(config: &GeneratorConfig) -> Result<GenerationOutcome, CsvError> {
    if config.path.exists() {
        tracing::info!(path = %config.path.display(), "test data already exists, skipping generation");
        return Ok(GenerationOutcome::Skipped);
    }

    let dialect = config.dialect;
    if !dialect.is_ascii() {
        return Err(CsvError::NonAsciiDialect {
            delimiter: dialect.delimiter,
            quotechar: dialect.quotechar,
        });
    }

    let file = std::fs::File::create(&config.path)
        .map_err(|e| CsvError::open_failed(&config.path, e))?;
    let mut writer = WriterBuilder::new()
        .delimiter(dialect.delimiter as u8)
        .quote(dialect.quotechar as u8)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    for id in 1..=config.row_count {
        writer.serialize(GeneratedRecord::for_row(id))?;
    }
    // serialize() only emits the header together with the first record
    if config.row_count == 0 {
        writer.write_record(HEADER)?;
    }
    writer.flush()?;

    tracing::info!(path = %config.path.display(), rows = config.row_count, "generated test data");
    Ok(GenerationOutcome::Generated {
        rows: config.row_count,
    })
}
