//! sf-core - Core library for Silverflow
//!
//! This crate provides shared types used across all Silverflow components:
//! configuration parsing, the tabular value model exchanged between the
//! storage layer and the transform stages, and the run context and run
//! state machine that the load runner drives.

pub mod config;
pub mod error;
pub mod run_state;
pub mod sql_utils;
pub mod table_name;
pub mod value;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use run_state::{
    CompletedStage, ErrorState, FailedStage, FailureReport, RunContext, RunState, RunStatus,
};
pub use table_name::TableName;
pub use value::{Column, ColumnType, Row, Value};
