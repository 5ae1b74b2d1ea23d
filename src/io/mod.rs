//! I/O module
//!
//! Handles character-level CSV parsing and serialization.
//!
//! # Components
//!
//! - `char_stream` - Peekable UTF-8 character cursor over any byte source
//! - `reader` - Streaming CSV reader with iterator interface
//! - `writer` - CSV writer with minimal quoting

pub mod char_stream;
pub mod reader;
pub mod writer;

pub use char_stream::CharStream;
pub use reader::CsvReader;
pub use writer::{encode_field, needs_quoting, CsvWriter};
