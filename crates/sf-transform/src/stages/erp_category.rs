//! ERP product categories, copied through unchanged.

use sf_core::{Column, ColumnType, Row, RunContext};

use super::EntityRule;
use crate::entity::Entity;
use crate::error::TransformResult;
use crate::record::{FromRow, IntoRow, Record, RowReader};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Option<String>,
    pub cat: Option<String>,
    pub subcat: Option<String>,
    pub maintenance: Option<String>,
}

impl Record for Category {
    const NAME: &'static str = "Category";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", ColumnType::Text),
        Column::new("cat", ColumnType::Text),
        Column::new("subcat", ColumnType::Text),
        Column::new("maintenance", ColumnType::Text),
    ];
}

impl FromRow for Category {
    fn from_row(row: Row) -> TransformResult<Self> {
        let mut r = RowReader::new::<Self>(row)?;
        Ok(Self {
            id: r.text()?,
            cat: r.text()?,
            subcat: r.text()?,
            maintenance: r.text()?,
        })
    }
}

impl IntoRow for Category {
    fn into_row(self) -> Row {
        vec![
            self.id.into(),
            self.cat.into(),
            self.subcat.into(),
            self.maintenance.into(),
        ]
    }
}

pub struct ErpCategoryRule;

impl EntityRule for ErpCategoryRule {
    const ENTITY: Entity = Entity::ErpCategory;
    type Raw = Category;
    type Clean = Category;

    fn apply(raw: Vec<Category>, _ctx: &RunContext) -> TransformResult<Vec<Category>> {
        Ok(raw)
    }
}
