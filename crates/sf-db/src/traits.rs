//! Storage traits used by the load runner

use crate::error::DbResult;
use async_trait::async_trait;
use sf_core::{Column, Row, TableName};

/// Supplies the full current contents of a bronze table
#[async_trait]
pub trait SourceReader: Send + Sync {
    /// Read every row of `table`, projected and typed as `columns`
    async fn read_table(&self, table: &TableName, columns: &[Column]) -> DbResult<Vec<Row>>;
}

/// Replaces the full contents of a silver table
#[async_trait]
pub trait SinkWriter: Send + Sync {
    /// Delete all rows of `table` and insert `rows`, atomically per table.
    ///
    /// Returns the number of rows inserted.
    async fn replace_table(
        &self,
        table: &TableName,
        columns: &[Column],
        rows: &[Row],
    ) -> DbResult<usize>;
}

/// Database abstraction for Silverflow
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: SourceReader + SinkWriter {
    /// Execute SQL that modifies data, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Execute query returning row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
