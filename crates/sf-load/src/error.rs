//! Error types for sf-load

use sf_core::{CoreError, ErrorState, FailureReport};
use sf_db::DbError;
use sf_transform::TransformError;
use thiserror::Error;

/// Errors raised while running a batch
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading the bronze table failed (L001)
    #[error("[L001] Stage '{stage}' could not read its source: {source}")]
    Read { stage: String, source: DbError },

    /// The stage's rules rejected the input (L002)
    #[error("[L002] Stage '{stage}' failed to transform: {source}")]
    Transform {
        stage: String,
        source: TransformError,
    },

    /// Replacing the silver table failed (L003)
    #[error("[L003] Stage '{stage}' could not write its target: {source}")]
    Write { stage: String, source: DbError },

    /// The run state machine rejected a transition (L004)
    #[error("[L004] {0}")]
    State(#[from] CoreError),
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Read { .. } => "L001",
            LoadError::Transform { .. } => "L002",
            LoadError::Write { .. } => "L003",
            LoadError::State(_) => "L004",
        }
    }

    /// Phase the error was raised in, for stage errors
    pub fn state(&self) -> Option<ErrorState> {
        match self {
            LoadError::Read { .. } => Some(ErrorState::Read),
            LoadError::Transform { .. } => Some(ErrorState::Transform),
            LoadError::Write { .. } => Some(ErrorState::Write),
            LoadError::State(_) => None,
        }
    }

    /// Structured report for a stage error.
    ///
    /// The code is the one of the underlying storage or transform error,
    /// so `D003` for a missing table rather than the generic `L001`.
    pub fn report(&self) -> Option<FailureReport> {
        let (stage, message, code) = match self {
            LoadError::Read { stage, source } | LoadError::Write { stage, source } => {
                (stage, source.to_string(), source.code())
            }
            LoadError::Transform { stage, source } => (stage, source.to_string(), source.code()),
            LoadError::State(_) => return None,
        };
        Some(FailureReport {
            stage: stage.clone(),
            message,
            code: code.to_string(),
            state: self.state()?,
        })
    }
}

/// Result type alias for LoadError
pub type LoadResult<T> = Result<T, LoadError>;
