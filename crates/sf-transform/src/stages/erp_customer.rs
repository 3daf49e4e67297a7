//! ERP customer demographics: id prefix, future birth dates, gender.

use chrono::NaiveDate;
use sf_core::{Column, ColumnType, Row, RunContext, Value};

use super::EntityRule;
use crate::entity::Entity;
use crate::error::TransformResult;
use crate::normalize::Gender;
use crate::record::{FromRow, IntoRow, Record, RowReader};

const LEGACY_PREFIX: &str = "NAS";

const COLUMNS: &[Column] = &[
    Column::new("cid", ColumnType::Text),
    Column::new("bdate", ColumnType::Date),
    Column::new("gen", ColumnType::Text),
];

#[derive(Debug, Clone, PartialEq)]
pub struct RawErpCustomer {
    pub cid: Option<String>,
    pub bdate: Option<NaiveDate>,
    pub gen: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanErpCustomer {
    pub cid: Option<String>,
    pub bdate: Option<NaiveDate>,
    pub gen: Gender,
}

impl Record for RawErpCustomer {
    const NAME: &'static str = "RawErpCustomer";
    const COLUMNS: &'static [Column] = COLUMNS;
}

impl Record for CleanErpCustomer {
    const NAME: &'static str = "CleanErpCustomer";
    const COLUMNS: &'static [Column] = COLUMNS;
}

impl FromRow for RawErpCustomer {
    fn from_row(row: Row) -> TransformResult<Self> {
        let mut r = RowReader::new::<Self>(row)?;
        Ok(Self {
            cid: r.text()?,
            bdate: r.date()?,
            gen: r.text()?,
        })
    }
}

impl IntoRow for CleanErpCustomer {
    fn into_row(self) -> Row {
        vec![
            self.cid.into(),
            self.bdate.into(),
            Value::Text(self.gen.label().to_string()),
        ]
    }
}

/// Drop the legacy `NAS` prefix so ids line up with CRM customer keys
fn strip_legacy_prefix(cid: String) -> String {
    match cid.strip_prefix(LEGACY_PREFIX) {
        Some(rest) => rest.to_string(),
        None => cid,
    }
}

pub struct ErpCustomerRule;

impl EntityRule for ErpCustomerRule {
    const ENTITY: Entity = Entity::ErpCustomer;
    type Raw = RawErpCustomer;
    type Clean = CleanErpCustomer;

    fn apply(raw: Vec<RawErpCustomer>, ctx: &RunContext) -> TransformResult<Vec<CleanErpCustomer>> {
        Ok(raw
            .into_iter()
            .map(|c| CleanErpCustomer {
                cid: c.cid.map(strip_legacy_prefix),
                bdate: c.bdate.filter(|d| *d <= ctx.as_of),
                gen: Gender::from_erp_code(c.gen.as_deref()),
            })
            .collect())
    }
}
