//! Custom CSV Library
//! # Overview
//!
//! This library provides a streaming, character-level CSV codec and the
//! harness used to benchmark it against the `csv` crate.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Row, Dialect, CsvError)
//! - [`io`] - The codec itself:
//!   - [`io::char_stream`] - Peekable UTF-8 character cursor
//!   - [`io::reader`] - Row-at-a-time parser
//!   - [`io::writer`] - Minimal-quoting serializer
//! - [`strategy`] - Whole-file codecs selectable at runtime (custom, standard)
//! - [`harness`] - Test-data generator and timing driver
//! - [`cli`] - CLI arguments parsing
//!
//! # Format
//!
//! - Fields are separated by the dialect's delimiter (default `,`)
//! - Fields containing the delimiter, the quote character or a line break are
//!   wrapped in the quote character (default `"`), with inner quotes doubled
//! - The reader accepts `\n`, `\r\n` and bare `\r` line endings; the writer
//!   always emits `\n`
//! - Blank lines are skipped on read
//!
//! # Example
//!
//! ```
//! use custom_csv::{CsvReader, CsvWriter, Dialect, Row};
//! use std::io::Cursor;
//!
//! let mut writer = CsvWriter::new(Vec::new(), Dialect::default());
//! writer.write_row(["a", "b,c", "d\"e"]).unwrap();
//! let bytes = writer.into_inner();
//! assert_eq!(bytes, b"a,\"b,c\",\"d\"\"e\"\n");
//!
//! let rows: Vec<Row> = CsvReader::new(Cursor::new(bytes), Dialect::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(rows, vec![vec!["a", "b,c", "d\"e"]]);
//! ```

// Module declarations
pub mod cli;
pub mod harness;
pub mod io;
pub mod strategy;
pub mod types;

pub use io::{encode_field, needs_quoting, CharStream, CsvReader, CsvWriter};
pub use strategy::{create_strategy, CodecStrategy};
pub use types::{CsvError, Dialect, Field, Row};
