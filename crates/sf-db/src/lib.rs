//! sf-db - Database abstraction layer for Silverflow
//!
//! This crate provides the `SourceReader` and `SinkWriter` traits the load
//! runner talks to, the combined `Database` trait, and the DuckDB
//! implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::{Database, SinkWriter, SourceReader};
