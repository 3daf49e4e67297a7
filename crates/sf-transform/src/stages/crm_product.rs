//! CRM product info: key split, cost and product line cleanup, and
//! validity intervals derived from the next start date per product key.

use chrono::{NaiveDate, NaiveDateTime};
use sf_core::{Column, ColumnType, Row, RunContext, Value};

use super::EntityRule;
use crate::entity::Entity;
use crate::error::TransformResult;
use crate::normalize::ProductLine;
use crate::product_key::ProductKey;
use crate::record::{FromRow, IntoRow, Record, RowReader};
use crate::window::with_next;

#[derive(Debug, Clone, PartialEq)]
pub struct RawProduct {
    pub prd_id: Option<i64>,
    pub prd_key: Option<String>,
    pub prd_nm: Option<String>,
    pub prd_cost: Option<i64>,
    pub prd_line: Option<String>,
    pub prd_start_dt: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanProduct {
    pub prd_id: Option<i64>,
    pub cat_id: String,
    pub prd_key: String,
    pub prd_nm: Option<String>,
    pub prd_cost: i64,
    pub prd_line: ProductLine,
    pub prd_start_dt: Option<NaiveDate>,
    pub prd_end_dt: Option<NaiveDate>,
}

impl Record for RawProduct {
    const NAME: &'static str = "RawProduct";
    const COLUMNS: &'static [Column] = &[
        Column::new("prd_id", ColumnType::Integer),
        Column::new("prd_key", ColumnType::Text),
        Column::new("prd_nm", ColumnType::Text),
        Column::new("prd_cost", ColumnType::Integer),
        Column::new("prd_line", ColumnType::Text),
        Column::new("prd_start_dt", ColumnType::Timestamp),
    ];
}

impl Record for CleanProduct {
    const NAME: &'static str = "CleanProduct";
    const COLUMNS: &'static [Column] = &[
        Column::new("prd_id", ColumnType::Integer),
        Column::new("cat_id", ColumnType::Text),
        Column::new("prd_key", ColumnType::Text),
        Column::new("prd_nm", ColumnType::Text),
        Column::new("prd_cost", ColumnType::Integer),
        Column::new("prd_line", ColumnType::Text),
        Column::new("prd_start_dt", ColumnType::Date),
        Column::new("prd_end_dt", ColumnType::Date),
    ];
}

impl FromRow for RawProduct {
    fn from_row(row: Row) -> TransformResult<Self> {
        let mut r = RowReader::new::<Self>(row)?;
        Ok(Self {
            prd_id: r.int()?,
            prd_key: r.text()?,
            prd_nm: r.text()?,
            prd_cost: r.int()?,
            prd_line: r.text()?,
            prd_start_dt: r.timestamp()?,
        })
    }
}

impl IntoRow for CleanProduct {
    fn into_row(self) -> Row {
        vec![
            self.prd_id.into(),
            Value::Text(self.cat_id),
            Value::Text(self.prd_key),
            self.prd_nm.into(),
            Value::Int(self.prd_cost),
            Value::Text(self.prd_line.label().to_string()),
            self.prd_start_dt.into(),
            self.prd_end_dt.into(),
        ]
    }
}

pub struct ProductInfoRule;

impl EntityRule for ProductInfoRule {
    const ENTITY: Entity = Entity::ProductInfo;
    type Raw = RawProduct;
    type Clean = CleanProduct;

    fn apply(raw: Vec<RawProduct>, _ctx: &RunContext) -> TransformResult<Vec<CleanProduct>> {
        // Any malformed key fails the whole stage before anything is derived
        let keyed = raw
            .into_iter()
            .map(|p| Ok((ProductKey::parse(p.prd_key.as_deref())?, p)))
            .collect::<TransformResult<Vec<_>>>()?;

        let intervals = with_next(
            keyed,
            |(_, p)| p.prd_key.clone(),
            |(_, p)| p.prd_start_dt,
        );

        Ok(intervals
            .into_iter()
            .map(|((key, p), next_start)| CleanProduct {
                prd_id: p.prd_id,
                cat_id: key.category_id,
                prd_key: key.product_key,
                prd_nm: p.prd_nm,
                prd_cost: p.prd_cost.filter(|c| *c >= 0).unwrap_or(0),
                prd_line: ProductLine::from_code(p.prd_line.as_deref()),
                prd_start_dt: p.prd_start_dt.map(|ts| ts.date()),
                prd_end_dt: next_start
                    .flatten()
                    .and_then(|ts| ts.date().pred_opt()),
            })
            .collect())
    }
}
