//! `csv` crate codec strategy
//!
//! The baseline the character-level codec is measured against. Configured to
//! match the custom codec's observable format where the `csv` crate allows it:
//! no header handling, ragged rows accepted. Rows are written with the crate's
//! default CRLF terminator, which the custom reader treats like `\n`.

use crate::strategy::CodecStrategy;
use crate::types::{CsvError, Dialect, Row};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::path::Path;

/// Codec backed by the `csv` crate
#[derive(Debug, Clone, Copy)]
pub struct StandardCodec {
    delimiter: u8,
    quote: u8,
}

impl StandardCodec {
    /// Create a codec for the given dialect
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::NonAsciiDialect`] if either character is wider than
    /// one byte.
    pub fn new(dialect: Dialect) -> Result<Self, CsvError> {
        if !dialect.is_ascii() {
            return Err(CsvError::NonAsciiDialect {
                delimiter: dialect.delimiter,
                quotechar: dialect.quotechar,
            });
        }

        Ok(Self {
            delimiter: dialect.delimiter as u8,
            quote: dialect.quotechar as u8,
        })
    }
}

impl CodecStrategy for StandardCodec {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn read_file(&self, path: &Path) -> Result<Vec<Row>, CsvError> {
        let file = std::fs::File::open(path).map_err(|e| CsvError::open_failed(path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }
        Ok(rows)
    }

    fn write_file(&self, rows: &[Row], path: &Path) -> Result<(), CsvError> {
        let file = std::fs::File::create(path).map_err(|e| CsvError::open_failed(path, e))?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::CustomCodec;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_standard_codec_reads_file() {
        let file = create_temp_csv("x,\"y\nz\",w\r\np,q");

        let rows = StandardCodec::new(Dialect::default())
            .unwrap()
            .read_file(file.path())
            .unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["x".to_string(), "y\nz".to_string(), "w".to_string()],
                vec!["p".to_string(), "q".to_string()],
            ]
        );
    }

    #[test]
    fn test_standard_codec_writes_crlf_terminators() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.csv");
        let rows = vec![
            vec!["a".to_string(), "b,c".to_string(), "d\"e".to_string()],
            vec!["f".to_string()],
        ];

        let codec = StandardCodec::new(Dialect::default()).unwrap();
        codec.write_file(&rows, &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "a,\"b,c\",\"d\"\"e\"\r\nf\r\n"
        );

        let read_back = CustomCodec::default().read_file(&path).unwrap();
        assert_eq!(read_back, rows);
    }

    #[rstest]
    #[case::non_ascii_delimiter('§', '"')]
    #[case::non_ascii_quote(',', '«')]
    fn test_standard_codec_rejects_non_ascii(#[case] delimiter: char, #[case] quotechar: char) {
        let dialect = Dialect::new(delimiter, quotechar).unwrap();
        assert_eq!(
            StandardCodec::new(dialect).unwrap_err(),
            CsvError::NonAsciiDialect {
                delimiter,
                quotechar
            }
        );
    }

    #[test]
    fn test_standard_codec_missing_file() {
        let codec = StandardCodec::new(Dialect::default()).unwrap();
        let result = codec.read_file(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(CsvError::FileNotFound { .. })));
    }
}
