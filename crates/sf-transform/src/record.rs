//! Typed records and their conversion to and from positional rows

use crate::error::{TransformError, TransformResult};
use chrono::{NaiveDate, NaiveDateTime};
use sf_core::{Column, ColumnType, Row, Value};

/// A record type with a fixed column layout
pub trait Record: Sized {
    /// Display name used in error messages
    const NAME: &'static str;

    /// Column layout, in row order
    const COLUMNS: &'static [Column];
}

/// A record that can be decoded from a source row
pub trait FromRow: Record {
    fn from_row(row: Row) -> TransformResult<Self>;
}

/// A record that can be encoded into a sink row
pub trait IntoRow: Record {
    fn into_row(self) -> Row;
}

/// Sequential, type-checked access to the cells of one row
pub struct RowReader {
    columns: &'static [Column],
    cells: std::vec::IntoIter<Value>,
    position: usize,
}

impl RowReader {
    /// Start reading `row` as a `R`, checking its width first
    pub fn new<R: Record>(row: Row) -> TransformResult<Self> {
        if row.len() != R::COLUMNS.len() {
            return Err(TransformError::RowShape {
                record: R::NAME,
                expected: R::COLUMNS.len(),
                actual: row.len(),
            });
        }
        Ok(Self {
            columns: R::COLUMNS,
            cells: row.into_iter(),
            position: 0,
        })
    }

    fn next_cell(&mut self) -> (Column, Value) {
        let column = self.columns[self.position];
        self.position += 1;
        // Width was checked in `new`
        (column, self.cells.next().unwrap_or(Value::Null))
    }

    fn mismatch(column: Column, found: &Value) -> TransformError {
        TransformError::ColumnType {
            column: column.name,
            expected: column.ty,
            found: format!("{:?}", found),
        }
    }

    pub fn int(&mut self) -> TransformResult<Option<i64>> {
        match self.next_cell() {
            (_, Value::Null) => Ok(None),
            (_, Value::Int(v)) => Ok(Some(v)),
            (column, other) => Err(Self::mismatch(column, &other)),
        }
    }

    pub fn text(&mut self) -> TransformResult<Option<String>> {
        match self.next_cell() {
            (_, Value::Null) => Ok(None),
            (_, Value::Text(v)) => Ok(Some(v)),
            (column, other) => Err(Self::mismatch(column, &other)),
        }
    }

    pub fn date(&mut self) -> TransformResult<Option<NaiveDate>> {
        match self.next_cell() {
            (_, Value::Null) => Ok(None),
            (_, Value::Date(v)) => Ok(Some(v)),
            (column, other) => Err(Self::mismatch(column, &other)),
        }
    }

    pub fn timestamp(&mut self) -> TransformResult<Option<NaiveDateTime>> {
        match self.next_cell() {
            (_, Value::Null) => Ok(None),
            (_, Value::Timestamp(v)) => Ok(Some(v)),
            // A date column read as timestamp is midnight of that day
            (column, Value::Date(v)) if column.ty == ColumnType::Timestamp => {
                Ok(v.and_hms_opt(0, 0, 0))
            }
            (column, other) => Err(Self::mismatch(column, &other)),
        }
    }
}
