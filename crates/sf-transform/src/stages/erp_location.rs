//! ERP customer locations: hyphen-free ids and full country names.

use sf_core::{Column, ColumnType, Row, RunContext, Value};

use super::EntityRule;
use crate::entity::Entity;
use crate::error::TransformResult;
use crate::normalize::normalize_country;
use crate::record::{FromRow, IntoRow, Record, RowReader};

const COLUMNS: &[Column] = &[
    Column::new("cid", ColumnType::Text),
    Column::new("cntry", ColumnType::Text),
];

#[derive(Debug, Clone, PartialEq)]
pub struct RawLocation {
    pub cid: Option<String>,
    pub cntry: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanLocation {
    pub cid: Option<String>,
    pub cntry: String,
}

impl Record for RawLocation {
    const NAME: &'static str = "RawLocation";
    const COLUMNS: &'static [Column] = COLUMNS;
}

impl Record for CleanLocation {
    const NAME: &'static str = "CleanLocation";
    const COLUMNS: &'static [Column] = COLUMNS;
}

impl FromRow for RawLocation {
    fn from_row(row: Row) -> TransformResult<Self> {
        let mut r = RowReader::new::<Self>(row)?;
        Ok(Self {
            cid: r.text()?,
            cntry: r.text()?,
        })
    }
}

impl IntoRow for CleanLocation {
    fn into_row(self) -> Row {
        vec![self.cid.into(), Value::Text(self.cntry)]
    }
}

pub struct ErpLocationRule;

impl EntityRule for ErpLocationRule {
    const ENTITY: Entity = Entity::ErpLocation;
    type Raw = RawLocation;
    type Clean = CleanLocation;

    fn apply(raw: Vec<RawLocation>, _ctx: &RunContext) -> TransformResult<Vec<CleanLocation>> {
        Ok(raw
            .into_iter()
            .map(|l| CleanLocation {
                cid: l.cid.map(|cid| cid.replace('-', "")),
                cntry: normalize_country(l.cntry.as_deref()),
            })
            .collect())
    }
}
