//! CSV writer with minimal quoting
//!
//! A field is quoted only when it has to be: when its text contains the
//! delimiter, the quote character, or `\n`. Quote characters inside a quoted
//! field are doubled. Rows always end with `\n`.
//!
//! A bare `\r` does not trigger quoting, so a field holding one is split in
//! two when read back.
//!
//! Every field goes through `Display::to_string` before the quoting decision,
//! so numbers, booleans and strings are all encoded by the same rule.

use crate::types::{CsvError, Dialect};
use std::borrow::Cow;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Whether `text` must be wrapped in quote characters
pub fn needs_quoting(text: &str, dialect: &Dialect) -> bool {
    text.chars()
        .any(|ch| ch == dialect.delimiter || ch == dialect.quotechar || ch == '\n')
}

/// Encode one field's text for output
///
/// Returns the text unchanged when no quoting is required.
///
/// # Examples
///
/// ```
/// use custom_csv::io::writer::encode_field;
/// use custom_csv::types::Dialect;
///
/// let dialect = Dialect::default();
/// assert_eq!(encode_field("plain", &dialect), "plain");
/// assert_eq!(encode_field("b,c", &dialect), "\"b,c\"");
/// assert_eq!(encode_field("d\"e", &dialect), "\"d\"\"e\"");
/// ```
pub fn encode_field<'a>(text: &'a str, dialect: &Dialect) -> Cow<'a, str> {
    if !needs_quoting(text, dialect) {
        return Cow::Borrowed(text);
    }

    let quote = dialect.quotechar;
    let mut encoded = String::with_capacity(text.len() + 2);
    encoded.push(quote);
    for ch in text.chars() {
        if ch == quote {
            encoded.push(quote);
        }
        encoded.push(ch);
    }
    encoded.push(quote);
    Cow::Owned(encoded)
}

/// Row-at-a-time CSV writer
///
/// Holds only its dialect between rows; each row is encoded in full and
/// handed to the sink with a single write.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    inner: W,
    dialect: Dialect,
}

impl CsvWriter<BufWriter<File>> {
    /// Create (or truncate) a CSV file for writing
    pub fn from_path(path: &Path, dialect: Dialect) -> Result<Self, CsvError> {
        let file = File::create(path).map_err(|e| CsvError::open_failed(path, e))?;
        Ok(Self::new(BufWriter::new(file), dialect))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Create a writer over any byte sink
    pub fn new(inner: W, dialect: Dialect) -> Self {
        Self { inner, dialect }
    }

    /// The dialect this writer was built with
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Serialize one row followed by a single `\n`
    ///
    /// An empty row produces an empty line.
    pub fn write_row<I>(&mut self, row: I) -> Result<(), CsvError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut line = String::new();
        for (index, field) in row.into_iter().enumerate() {
            if index > 0 {
                line.push(self.dialect.delimiter);
            }
            let text = field.to_string();
            line.push_str(&encode_field(&text, &self.dialect));
        }
        line.push('\n');

        self.inner.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Serialize rows in order
    ///
    /// Stops at the first failed write; rows before it have already been
    /// handed to the sink.
    pub fn write_rows<I>(&mut self, rows: I) -> Result<(), CsvError>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Display,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), CsvError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Get a reference to the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the underlying sink without flushing it
    pub fn into_inner(self) -> W {
        self.inner
    }
}
