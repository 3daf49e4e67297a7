//! CRM sales details: integer dates parsed, sales and price reconciled.

use chrono::NaiveDate;
use sf_core::{Column, ColumnType, Row, RunContext};

use super::EntityRule;
use crate::dates::parse_yyyymmdd;
use crate::entity::Entity;
use crate::error::TransformResult;
use crate::reconcile::{price_final, sales_final};
use crate::record::{FromRow, IntoRow, Record, RowReader};

#[derive(Debug, Clone, PartialEq)]
pub struct RawSale {
    pub sls_ord_num: Option<String>,
    pub sls_prd_key: Option<String>,
    pub sls_cust_id: Option<i64>,
    pub sls_order_dt: Option<i64>,
    pub sls_ship_dt: Option<i64>,
    pub sls_due_dt: Option<i64>,
    pub sls_sales: Option<i64>,
    pub sls_quantity: Option<i64>,
    pub sls_price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanSale {
    pub sls_ord_num: Option<String>,
    pub sls_prd_key: Option<String>,
    pub sls_cust_id: Option<i64>,
    pub sls_order_dt: Option<NaiveDate>,
    pub sls_ship_dt: Option<NaiveDate>,
    pub sls_due_dt: Option<NaiveDate>,
    pub sls_sales: Option<i64>,
    pub sls_quantity: Option<i64>,
    pub sls_price: Option<i64>,
}

impl Record for RawSale {
    const NAME: &'static str = "RawSale";
    const COLUMNS: &'static [Column] = &[
        Column::new("sls_ord_num", ColumnType::Text),
        Column::new("sls_prd_key", ColumnType::Text),
        Column::new("sls_cust_id", ColumnType::Integer),
        Column::new("sls_order_dt", ColumnType::Integer),
        Column::new("sls_ship_dt", ColumnType::Integer),
        Column::new("sls_due_dt", ColumnType::Integer),
        Column::new("sls_sales", ColumnType::Integer),
        Column::new("sls_quantity", ColumnType::Integer),
        Column::new("sls_price", ColumnType::Integer),
    ];
}

impl Record for CleanSale {
    const NAME: &'static str = "CleanSale";
    const COLUMNS: &'static [Column] = &[
        Column::new("sls_ord_num", ColumnType::Text),
        Column::new("sls_prd_key", ColumnType::Text),
        Column::new("sls_cust_id", ColumnType::Integer),
        Column::new("sls_order_dt", ColumnType::Date),
        Column::new("sls_ship_dt", ColumnType::Date),
        Column::new("sls_due_dt", ColumnType::Date),
        Column::new("sls_sales", ColumnType::Integer),
        Column::new("sls_quantity", ColumnType::Integer),
        Column::new("sls_price", ColumnType::Integer),
    ];
}

impl FromRow for RawSale {
    fn from_row(row: Row) -> TransformResult<Self> {
        let mut r = RowReader::new::<Self>(row)?;
        Ok(Self {
            sls_ord_num: r.text()?,
            sls_prd_key: r.text()?,
            sls_cust_id: r.int()?,
            sls_order_dt: r.int()?,
            sls_ship_dt: r.int()?,
            sls_due_dt: r.int()?,
            sls_sales: r.int()?,
            sls_quantity: r.int()?,
            sls_price: r.int()?,
        })
    }
}

impl IntoRow for CleanSale {
    fn into_row(self) -> Row {
        vec![
            self.sls_ord_num.into(),
            self.sls_prd_key.into(),
            self.sls_cust_id.into(),
            self.sls_order_dt.into(),
            self.sls_ship_dt.into(),
            self.sls_due_dt.into(),
            self.sls_sales.into(),
            self.sls_quantity.into(),
            self.sls_price.into(),
        ]
    }
}

impl From<RawSale> for CleanSale {
    fn from(raw: RawSale) -> Self {
        let (sales, quantity, price) = (raw.sls_sales, raw.sls_quantity, raw.sls_price);
        Self {
            sls_ord_num: raw.sls_ord_num,
            sls_prd_key: raw.sls_prd_key,
            sls_cust_id: raw.sls_cust_id,
            sls_order_dt: parse_yyyymmdd(raw.sls_order_dt),
            sls_ship_dt: parse_yyyymmdd(raw.sls_ship_dt),
            sls_due_dt: parse_yyyymmdd(raw.sls_due_dt),
            sls_sales: sales_final(sales, quantity, price),
            sls_quantity: quantity,
            sls_price: price_final(sales, quantity, price),
        }
    }
}

pub struct SalesDetailRule;

impl EntityRule for SalesDetailRule {
    const ENTITY: Entity = Entity::SalesDetail;
    type Raw = RawSale;
    type Clean = CleanSale;

    fn apply(raw: Vec<RawSale>, _ctx: &RunContext) -> TransformResult<Vec<CleanSale>> {
        Ok(raw.into_iter().map(CleanSale::from).collect())
    }
}
