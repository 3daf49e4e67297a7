//! Error types for sf-transform

use sf_core::ColumnType;
use thiserror::Error;

/// Errors raised while mapping bronze rows into silver rows
#[derive(Error, Debug)]
pub enum TransformError {
    /// T001: Product key does not follow the fixed positional layout
    #[error("[T001] Malformed product key {key:?}: {reason}")]
    MalformedProductKey { key: Option<String>, reason: String },

    /// T002: Row width does not match the record layout
    #[error("[T002] Row has {actual} values but {record} expects {expected}")]
    RowShape {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// T003: Cell holds a value of the wrong type for its column
    #[error("[T003] Column '{column}' expected {expected} but found {found}")]
    ColumnType {
        column: &'static str,
        expected: ColumnType,
        found: String,
    },
}

impl TransformError {
    /// Stable error code, matching the bracketed prefix of the message
    pub fn code(&self) -> &'static str {
        match self {
            TransformError::MalformedProductKey { .. } => "T001",
            TransformError::RowShape { .. } => "T002",
            TransformError::ColumnType { .. } => "T003",
        }
    }
}

/// Result type alias for TransformError
pub type TransformResult<T> = Result<T, TransformError>;
