//! Row representation shared by the reader and the writer

/// One scalar text value within a row
pub type Field = String;

/// Ordered sequence of fields
///
/// Column position is significant; rows in the same stream may have
/// different lengths.
pub type Row = Vec<Field>;
