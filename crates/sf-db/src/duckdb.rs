//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::{Database, SinkWriter, SourceReader};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use duckdb::types::Value as DuckValue;
use duckdb::Connection;
use sf_core::sql_utils::quote_ident;
use sf_core::{Column, ColumnType, Row, TableName, Value};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// DuckDB database backend
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Execute SQL synchronously
    fn execute_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.lock()?;
        conn.execute(sql, [])
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    /// Query count synchronously
    fn query_count_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM ({})", sql), [], |row| {
                row.get(0)
            })
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(count as usize)
    }

    /// Check if relation exists synchronously
    fn relation_exists_sync(&self, name: &str) -> DbResult<bool> {
        let conn = self.lock()?;

        let (schema, table) = match name.rfind('.') {
            Some(pos) => (&name[..pos], &name[pos + 1..]),
            None => ("main", name),
        };

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = ? AND table_name = ?",
            duckdb::params![schema, table],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    /// Read a whole table synchronously, casting every column to its declared type
    fn read_table_sync(&self, table: &TableName, columns: &[Column]) -> DbResult<Vec<Row>> {
        let sql = select_sql(table, columns);
        log::debug!("Reading {}: {}", table, sql);

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let values = columns
                .iter()
                .enumerate()
                .map(|(idx, column)| read_value(row, idx, column))
                .collect::<DbResult<Row>>()?;
            out.push(values);
        }
        Ok(out)
    }

    /// Delete + insert inside one transaction
    fn replace_table_sync(
        &self,
        table: &TableName,
        columns: &[Column],
        rows: &[Row],
    ) -> DbResult<usize> {
        if let Some(bad) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(DbError::RowShape {
                table: table.to_string(),
                expected: columns.len(),
                actual: bad.len(),
            });
        }

        let insert = insert_sql(table, columns);
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let deleted = tx.execute(&format!("DELETE FROM {}", table.quoted()), [])?;
        log::debug!("Cleared {} rows from {}", deleted, table);

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(&insert)?;
            for row in rows {
                let params: Vec<DuckValue> = row.iter().map(to_duck_value).collect();
                inserted += stmt.execute(duckdb::params_from_iter(params.iter()))?;
            }
        }

        tx.commit()?;
        Ok(inserted)
    }
}

fn select_sql(table: &TableName, columns: &[Column]) -> String {
    let projection = columns
        .iter()
        .map(|c| {
            let ident = quote_ident(c.name);
            match c.ty {
                ColumnType::Integer | ColumnType::Text => {
                    format!("CAST({} AS {})", ident, c.ty.sql_type())
                }
                // Temporal values travel as text so chrono owns the parsing
                ColumnType::Date | ColumnType::Timestamp => {
                    format!("CAST(CAST({} AS {}) AS VARCHAR)", ident, c.ty.sql_type())
                }
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {} FROM {}", projection, table.quoted())
}

fn insert_sql(table: &TableName, columns: &[Column]) -> String {
    let names = columns
        .iter()
        .map(|c| quote_ident(c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = columns
        .iter()
        .map(|c| format!("CAST(? AS {})", c.ty.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.quoted(),
        names,
        placeholders
    )
}

fn read_value(row: &duckdb::Row<'_>, idx: usize, column: &Column) -> DbResult<Value> {
    let value = match column.ty {
        ColumnType::Integer => Value::from(row.get::<_, Option<i64>>(idx)?),
        ColumnType::Text => Value::from(row.get::<_, Option<String>>(idx)?),
        ColumnType::Date => match row.get::<_, Option<String>>(idx)? {
            Some(text) => Value::Date(
                NaiveDate::parse_from_str(&text, DATE_FORMAT)
                    .map_err(|_| decode_error(column, &text))?,
            ),
            None => Value::Null,
        },
        ColumnType::Timestamp => match row.get::<_, Option<String>>(idx)? {
            Some(text) => Value::Timestamp(
                NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
                    .map_err(|_| decode_error(column, &text))?,
            ),
            None => Value::Null,
        },
    };
    Ok(value)
}

fn decode_error(column: &Column, text: &str) -> DbError {
    DbError::DecodeError {
        column: column.name.to_string(),
        value: text.to_string(),
        expected: column.ty.to_string(),
    }
}

fn to_duck_value(value: &Value) -> DuckValue {
    match value {
        Value::Null => DuckValue::Null,
        Value::Int(v) => DuckValue::BigInt(*v),
        Value::Text(v) => DuckValue::Text(v.clone()),
        Value::Date(_) | Value::Timestamp(_) => DuckValue::Text(value.to_string()),
    }
}

#[async_trait]
impl SourceReader for DuckDbBackend {
    async fn read_table(&self, table: &TableName, columns: &[Column]) -> DbResult<Vec<Row>> {
        self.read_table_sync(table, columns)
    }
}

#[async_trait]
impl SinkWriter for DuckDbBackend {
    async fn replace_table(
        &self,
        table: &TableName,
        columns: &[Column],
        rows: &[Row],
    ) -> DbResult<usize> {
        self.replace_table_sync(table, columns, rows)
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        self.execute_sync(sql)
    }

    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn relation_exists(&self, name: &str) -> DbResult<bool> {
        self.relation_exists_sync(name)
    }

    async fn query_count(&self, sql: &str) -> DbResult<usize> {
        self.query_count_sync(sql)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
