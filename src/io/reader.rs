//! Streaming CSV reader with iterator interface
//!
//! Parses a character stream into rows one row at a time. The reader holds no
//! more than the row being built and a single lookahead character.
//!
//! # Parsing Policy
//!
//! - Rows end at an unquoted `\n`, `\r\n`, a bare `\r`, or end of stream.
//! - A quote opens a quoted field only when the field so far is empty or
//!   whitespace; anywhere else it is kept as literal text.
//! - Inside quotes, a doubled quote is one literal quote and newlines and
//!   delimiters are plain content. A single quote closes the quoted section,
//!   and anything after it up to the next delimiter joins the same field.
//! - Lines whose fields are all empty are skipped, never returned as rows.
//!
//! Malformed quoting is never an error. Only failures of the underlying stream
//! are reported.
//!
//! ```no_run
//! use custom_csv::io::reader::CsvReader;
//! use custom_csv::types::Dialect;
//! use std::path::Path;
//!
//! let reader = CsvReader::from_path(Path::new("test_data.csv"), Dialect::default()).unwrap();
//! for row in reader {
//!     match row {
//!         Ok(row) => println!("{:?}", row),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::char_stream::CharStream;
use crate::types::{CsvError, Dialect, Row};
use std::fs::File;
use std::io::{BufReader, Read};
use std::mem;
use std::path::Path;

/// Quoting state of the field currently being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Unquoted,
    Quoted,
}

/// Row-at-a-time CSV reader
///
/// Bound to one input stream and exhausted once. After end of stream, or
/// after an I/O error, every further call reports end of sequence.
#[derive(Debug)]
pub struct CsvReader<R> {
    stream: CharStream<R>,
    dialect: Dialect,
    line: u64,
    rows_read: u64,
    exhausted: bool,
}

impl CsvReader<BufReader<File>> {
    /// Open a CSV file for reading
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::FileNotFound`] if the file does not exist, or
    /// [`CsvError::Io`] if it could not be opened for another reason.
    pub fn from_path(path: &Path, dialect: Dialect) -> Result<Self, CsvError> {
        let file = File::open(path).map_err(|e| CsvError::open_failed(path, e))?;
        Ok(Self::new(BufReader::new(file), dialect))
    }
}

impl<R: Read> CsvReader<R> {
    /// Create a reader over any byte source
    ///
    /// The caller keeps responsibility for opening and closing the source.
    pub fn new(reader: R, dialect: Dialect) -> Self {
        Self {
            stream: CharStream::new(reader),
            dialect,
            line: 1,
            rows_read: 0,
            exhausted: false,
        }
    }

    /// The dialect this reader was built with
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Current 1-based physical line of the cursor
    ///
    /// Counts row terminators as well as newlines embedded in quoted fields.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Number of rows returned so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Parse the next row
    ///
    /// # Returns
    ///
    /// * `Ok(Some(row))` - The next non-blank row
    /// * `Ok(None)` - End of sequence; repeated calls keep returning it
    /// * `Err(CsvError)` - The underlying stream failed; the reader is fused
    pub fn read_row(&mut self) -> Result<Option<Row>, CsvError> {
        if self.exhausted {
            return Ok(None);
        }

        match self.parse_row() {
            Ok(Some(row)) => {
                self.rows_read += 1;
                Ok(Some(row))
            }
            Ok(None) => {
                self.exhausted = true;
                tracing::debug!(rows = self.rows_read, lines = self.line, "reached end of CSV stream");
                Ok(None)
            }
            Err(e) => {
                self.exhausted = true;
                Err(e.into())
            }
        }
    }

    fn parse_row(&mut self) -> std::io::Result<Option<Row>> {
        let Dialect {
            delimiter,
            quotechar,
        } = self.dialect;

        let mut state = ParserState::Unquoted;
        let mut row = Row::new();
        let mut field = String::new();

        loop {
            let Some(ch) = self.stream.next_char()? else {
                // No trailing terminator is required for the last row
                if !row.is_empty() || !field.is_empty() {
                    row.push(field);
                    return Ok(Some(row));
                }
                return Ok(None);
            };

            match state {
                ParserState::Quoted => {
                    if ch == quotechar {
                        if self.stream.peek()? == Some(quotechar) {
                            self.stream.consume();
                            field.push(quotechar);
                        } else {
                            // The peeked character stays in the stream
                            state = ParserState::Unquoted;
                        }
                    } else {
                        if ch == '\n' {
                            self.line += 1;
                        }
                        field.push(ch);
                    }
                }
                ParserState::Unquoted => {
                    if ch == delimiter {
                        row.push(mem::take(&mut field));
                    } else if ch == quotechar {
                        if field.trim().is_empty() {
                            state = ParserState::Quoted;
                        } else {
                            field.push(ch);
                        }
                    } else if ch == '\n' || ch == '\r' {
                        if ch == '\r' && self.stream.peek()? == Some('\n') {
                            self.stream.consume();
                        }
                        self.line += 1;

                        row.push(mem::take(&mut field));
                        if row.iter().any(|f| !f.is_empty()) {
                            return Ok(Some(row));
                        }
                        row.clear();
                    } else {
                        field.push(ch);
                    }
                }
            }
        }
    }
}

impl<R: Read> Iterator for CsvReader<R> {
    type Item = Result<Row, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for CsvReader<R> {}
