//! Codec strategy module
//!
//! This module defines the Strategy pattern for whole-file CSV reads and writes.
//! It lets the benchmark driver run this crate's character-level codec and the
//! `csv` crate's buffered codec through the same interface, selected at runtime.

use crate::cli::StrategyType;
use crate::types::{CsvError, Dialect, Row};
use std::path::Path;

pub mod custom;
pub mod standard;

pub use custom::CustomCodec;
pub use standard::StandardCodec;

/// Whole-file CSV codec
///
/// Implementations own their dialect and open and close the files they are
/// given.
pub trait CodecStrategy: Send + Sync {
    /// Short name used in benchmark reports
    fn name(&self) -> &'static str;

    /// Read every row of the file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or (for codecs
    /// that validate structure) if the content is rejected.
    fn read_file(&self, path: &Path) -> Result<Vec<Row>, CsvError>;

    /// Write `rows` to the file at `path`, replacing its contents
    fn write_file(&self, rows: &[Row], path: &Path) -> Result<(), CsvError>;
}

/// Create a codec strategy for the given type and dialect
///
/// # Errors
///
/// The standard strategy requires an ASCII dialect and returns
/// [`CsvError::NonAsciiDialect`] otherwise.
pub fn create_strategy(
    strategy_type: StrategyType,
    dialect: Dialect,
) -> Result<Box<dyn CodecStrategy>, CsvError> {
    match strategy_type {
        StrategyType::Custom => Ok(Box::new(CustomCodec::new(dialect))),
        StrategyType::Standard => Ok(Box::new(StandardCodec::new(dialect)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::custom(StrategyType::Custom, "custom")]
    #[case::standard(StrategyType::Standard, "standard")]
    fn test_create_strategy_names(#[case] strategy_type: StrategyType, #[case] expected: &str) {
        let strategy = create_strategy(strategy_type, Dialect::default()).unwrap();
        assert_eq!(strategy.name(), expected);
    }

    #[test]
    fn test_create_standard_strategy_rejects_non_ascii_dialect() {
        let dialect = Dialect::new('§', '"').unwrap();
        assert!(create_strategy(StrategyType::Custom, dialect).is_ok());
        assert!(matches!(
            create_strategy(StrategyType::Standard, dialect),
            Err(CsvError::NonAsciiDialect { .. })
        ));
    }
}
