//! sf-load - Load runner for Silverflow
//!
//! [`LoadRunner`] executes the transform stages in their fixed order against
//! a [`SourceReader`](sf_db::SourceReader) and a
//! [`SinkWriter`](sf_db::SinkWriter), aborting on the first failure, and
//! returns a [`BatchReport`].

pub mod error;
pub mod report;
pub mod runner;

pub use error::{LoadError, LoadResult};
pub use report::BatchReport;
pub use runner::{LoadRunner, DEFAULT_BRONZE_SCHEMA, DEFAULT_SILVER_SCHEMA};
