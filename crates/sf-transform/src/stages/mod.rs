//! Transform stages, one per entity
//!
//! Each entity module defines its raw and clean record types and an
//! [`EntityRule`]. [`RuleStage`] adapts a rule into the row-level
//! [`TransformStage`] the load runner drives.

mod crm_customer;
mod crm_product;
mod crm_sales;
mod erp_category;
mod erp_customer;
mod erp_location;

pub use crm_customer::{CleanCustomer, CustomerInfoRule, RawCustomer};
pub use crm_product::{CleanProduct, ProductInfoRule, RawProduct};
pub use crm_sales::{CleanSale, RawSale, SalesDetailRule};
pub use erp_category::{Category, ErpCategoryRule};
pub use erp_customer::{CleanErpCustomer, ErpCustomerRule, RawErpCustomer};
pub use erp_location::{CleanLocation, ErpLocationRule, RawLocation};

use crate::entity::Entity;
use crate::error::TransformResult;
use crate::record::{FromRow, IntoRow, Record};
use sf_core::{Column, Row, RunContext};
use std::marker::PhantomData;

/// Row-level transform for one bronze table
pub trait TransformStage: Send + Sync {
    /// The entity this stage rebuilds
    fn entity(&self) -> Entity;

    /// Stage name, used in logs and reports
    fn name(&self) -> &'static str {
        self.entity().table()
    }

    /// Columns read from the bronze table
    fn source_columns(&self) -> &'static [Column];

    /// Columns written to the silver table
    fn target_columns(&self) -> &'static [Column];

    /// Map the full bronze contents to the full silver contents
    fn transform(&self, rows: Vec<Row>, ctx: &RunContext) -> TransformResult<Vec<Row>>;
}

/// Typed mapping rule for one entity
pub trait EntityRule {
    const ENTITY: Entity;
    type Raw: FromRow;
    type Clean: IntoRow;

    fn apply(raw: Vec<Self::Raw>, ctx: &RunContext) -> TransformResult<Vec<Self::Clean>>;
}

/// Adapts an [`EntityRule`] to a [`TransformStage`]
pub struct RuleStage<R>(PhantomData<fn() -> R>);

impl<R: EntityRule> RuleStage<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R: EntityRule> Default for RuleStage<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntityRule> TransformStage for RuleStage<R> {
    fn entity(&self) -> Entity {
        R::ENTITY
    }

    fn source_columns(&self) -> &'static [Column] {
        <R::Raw as Record>::COLUMNS
    }

    fn target_columns(&self) -> &'static [Column] {
        <R::Clean as Record>::COLUMNS
    }

    fn transform(&self, rows: Vec<Row>, ctx: &RunContext) -> TransformResult<Vec<Row>> {
        let raw = rows
            .into_iter()
            .map(<R::Raw as FromRow>::from_row)
            .collect::<TransformResult<Vec<_>>>()?;
        let clean = R::apply(raw, ctx)?;
        Ok(clean.into_iter().map(IntoRow::into_row).collect())
    }
}

/// All stages in their fixed execution order
pub fn default_stages() -> Vec<Box<dyn TransformStage>> {
    let stages: Vec<Box<dyn TransformStage>> = vec![
        Box::new(RuleStage::<CustomerInfoRule>::new()),
        Box::new(RuleStage::<ProductInfoRule>::new()),
        Box::new(RuleStage::<SalesDetailRule>::new()),
        Box::new(RuleStage::<ErpCustomerRule>::new()),
        Box::new(RuleStage::<ErpLocationRule>::new()),
        Box::new(RuleStage::<ErpCategoryRule>::new()),
    ];
    debug_assert!(stages
        .iter()
        .map(|s| s.entity())
        .eq(Entity::ALL.iter().copied()));
    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sf_core::Value;

    fn ctx() -> RunContext {
        RunContext::new(NaiveDate::from_ymd_opt(2024, 1, 1))
    }

    #[test]
    fn test_default_stage_order() {
        let names: Vec<_> = default_stages().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "crm_cust_info",
                "crm_prd_info",
                "crm_sales_details",
                "erp_cust_az12",
                "erp_loc_a101",
                "erp_px_cat_g1v2",
            ]
        );
    }

    #[test]
    fn test_output_rows_match_target_width() {
        let stage = RuleStage::<ErpLocationRule>::new();
        let out = stage
            .transform(
                vec![vec![
                    Value::Text("AW-00011000".to_string()),
                    Value::Text("DE".to_string()),
                ]],
                &ctx(),
            )
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), stage.target_columns().len());
    }

    #[test]
    fn test_bad_row_fails_stage() {
        let stage = RuleStage::<ErpLocationRule>::new();
        let err = stage
            .transform(vec![vec![Value::Int(1)]], &ctx())
            .unwrap_err();
        assert_eq!(err.code(), "T002");
    }
}
