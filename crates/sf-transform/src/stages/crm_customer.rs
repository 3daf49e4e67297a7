//! CRM customer info: latest record per customer id, trimmed names,
//! standardized marital status and gender.

use chrono::NaiveDate;
use sf_core::{Column, ColumnType, Row, RunContext, Value};

use super::EntityRule;
use crate::entity::Entity;
use crate::error::TransformResult;
use crate::normalize::{trim_text, Gender, MaritalStatus};
use crate::record::{FromRow, IntoRow, Record, RowReader};
use crate::window::latest_per_key;

const COLUMNS: &[Column] = &[
    Column::new("cst_id", ColumnType::Integer),
    Column::new("cst_key", ColumnType::Text),
    Column::new("cst_firstname", ColumnType::Text),
    Column::new("cst_lastname", ColumnType::Text),
    Column::new("cst_marital_status", ColumnType::Text),
    Column::new("cst_gndr", ColumnType::Text),
    Column::new("cst_create_date", ColumnType::Date),
];

#[derive(Debug, Clone, PartialEq)]
pub struct RawCustomer {
    pub cst_id: Option<i64>,
    pub cst_key: Option<String>,
    pub cst_firstname: Option<String>,
    pub cst_lastname: Option<String>,
    pub cst_marital_status: Option<String>,
    pub cst_gndr: Option<String>,
    pub cst_create_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanCustomer {
    pub cst_id: i64,
    pub cst_key: Option<String>,
    pub cst_firstname: Option<String>,
    pub cst_lastname: Option<String>,
    pub cst_marital_status: MaritalStatus,
    pub cst_gndr: Gender,
    pub cst_create_date: Option<NaiveDate>,
}

impl Record for RawCustomer {
    const NAME: &'static str = "RawCustomer";
    const COLUMNS: &'static [Column] = COLUMNS;
}

impl Record for CleanCustomer {
    const NAME: &'static str = "CleanCustomer";
    const COLUMNS: &'static [Column] = COLUMNS;
}

impl FromRow for RawCustomer {
    fn from_row(row: Row) -> TransformResult<Self> {
        let mut r = RowReader::new::<Self>(row)?;
        Ok(Self {
            cst_id: r.int()?,
            cst_key: r.text()?,
            cst_firstname: r.text()?,
            cst_lastname: r.text()?,
            cst_marital_status: r.text()?,
            cst_gndr: r.text()?,
            cst_create_date: r.date()?,
        })
    }
}

impl IntoRow for CleanCustomer {
    fn into_row(self) -> Row {
        vec![
            Value::Int(self.cst_id),
            self.cst_key.into(),
            self.cst_firstname.into(),
            self.cst_lastname.into(),
            Value::Text(self.cst_marital_status.label().to_string()),
            Value::Text(self.cst_gndr.label().to_string()),
            self.cst_create_date.into(),
        ]
    }
}

pub struct CustomerInfoRule;

impl EntityRule for CustomerInfoRule {
    const ENTITY: Entity = Entity::CustomerInfo;
    type Raw = RawCustomer;
    type Clean = CleanCustomer;

    fn apply(raw: Vec<RawCustomer>, _ctx: &RunContext) -> TransformResult<Vec<CleanCustomer>> {
        let total = raw.len();
        let latest = latest_per_key(raw, |c| c.cst_id, |c| c.cst_create_date);
        log::debug!(
            "crm_cust_info: kept {} of {} records after dedup",
            latest.len(),
            total
        );

        Ok(latest
            .into_iter()
            .filter_map(|c| {
                Some(CleanCustomer {
                    cst_id: c.cst_id?,
                    cst_key: c.cst_key,
                    cst_firstname: trim_text(c.cst_firstname),
                    cst_lastname: trim_text(c.cst_lastname),
                    cst_marital_status: MaritalStatus::from_code(c.cst_marital_status.as_deref()),
                    cst_gndr: Gender::from_crm_code(c.cst_gndr.as_deref()),
                    cst_create_date: c.cst_create_date,
                })
            })
            .collect())
    }
}
