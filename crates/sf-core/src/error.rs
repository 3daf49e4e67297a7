//! Error types for sf-core

use thiserror::Error;

/// Core error type for Silverflow
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E005: Run state transition not allowed from the current status
    #[error("[E005] Invalid run state transition: cannot {action} while {status}")]
    InvalidTransition { action: String, status: String },
}

impl CoreError {
    /// Stable error code, matching the bracketed prefix of the message
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::ConfigNotFound { .. } => "E001",
            CoreError::ConfigParseError(_) => "E002",
            CoreError::ConfigInvalid { .. } => "E003",
            CoreError::IoWithPath { .. } => "E004",
            CoreError::InvalidTransition { .. } => "E005",
        }
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
