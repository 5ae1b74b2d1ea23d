//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `row`: Field and row representation
//! - `dialect`: Delimiter/quote configuration
//! - `error`: Error types for the codec

pub mod dialect;
pub mod error;
pub mod row;

pub use dialect::Dialect;
pub use error::CsvError;
pub use row::{Field, Row};
