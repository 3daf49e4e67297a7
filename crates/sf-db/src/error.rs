//! Error types for sf-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table or view not found: {0}")]
    TableNotFound(String),

    /// Stored value could not be decoded into the declared column type (D004)
    #[error("[D004] Cannot decode '{value}' in column '{column}' as {expected}")]
    DecodeError {
        column: String,
        value: String,
        expected: String,
    },

    /// Row width does not match the declared columns (D005)
    #[error("[D005] Row has {actual} values but table '{table}' expects {expected}")]
    RowShape {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Mutex poisoned (D006)
    #[error("[D006] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

impl DbError {
    /// Stable error code, matching the bracketed prefix of the message
    pub fn code(&self) -> &'static str {
        match self {
            DbError::ConnectionError(_) => "D001",
            DbError::ExecutionError(_) => "D002",
            DbError::TableNotFound(_) => "D003",
            DbError::DecodeError { .. } => "D004",
            DbError::RowShape { .. } => "D005",
            DbError::MutexPoisoned(_) => "D006",
        }
    }
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error does not expose structured variants, so missing
        // relations are recognised from the catalog error text.
        let msg = err.to_string();
        if msg.contains("Table with name")
            || msg.contains("View with name")
            || msg.contains("Table or view with name")
            || (msg.contains("Catalog Error") && msg.contains("Table") && msg.contains("not found"))
        {
            DbError::TableNotFound(msg)
        } else {
            DbError::ExecutionError(msg)
        }
    }
}
