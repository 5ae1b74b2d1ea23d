//! Dialect configuration shared by the reader and the writer

use super::error::CsvError;

/// Delimiter and quote character used to read or write a CSV stream
///
/// Fixed at construction time. The default dialect is comma-separated with
/// double-quote quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Separates fields within a row
    pub delimiter: char,
    /// Marks quoted fields and, doubled, escapes itself inside one
    pub quotechar: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quotechar: '"',
        }
    }
}

impl Dialect {
    /// Create a dialect, rejecting combinations the parser cannot tell apart
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::InvalidDialect`] if the delimiter equals the quote
    /// character, or if either of them is a line terminator.
    pub fn new(delimiter: char, quotechar: char) -> Result<Self, CsvError> {
        if delimiter == quotechar {
            return Err(CsvError::invalid_dialect(
                "delimiter and quotechar must differ",
            ));
        }
        if is_line_terminator(delimiter) {
            return Err(CsvError::invalid_dialect(
                "delimiter cannot be a line terminator",
            ));
        }
        if is_line_terminator(quotechar) {
            return Err(CsvError::invalid_dialect(
                "quotechar cannot be a line terminator",
            ));
        }

        Ok(Self {
            delimiter,
            quotechar,
        })
    }

    /// Whether both characters fit in a single byte
    pub fn is_ascii(&self) -> bool {
        self.delimiter.is_ascii() && self.quotechar.is_ascii()
    }
}

fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}
