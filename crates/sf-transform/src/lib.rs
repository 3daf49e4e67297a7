//! sf-transform - Silver-layer transform stages for Silverflow
//!
//! Each [`TransformStage`] turns the full contents of one bronze table into
//! the cleansed rows of its silver counterpart. Stages are pure and
//! synchronous; reading and writing storage belongs to the load runner.
//!
//! The shared rule building blocks live in their own modules:
//! - `normalize`: trimming and coded-value standardization
//! - `dates`: YYYYMMDD integer date parsing
//! - `window`: partition-and-rank dedup and ordered look-ahead
//! - `product_key`: fixed-layout product key parsing
//! - `reconcile`: sales/price validation and recalculation

pub mod dates;
pub mod entity;
pub mod error;
pub mod normalize;
pub mod product_key;
pub mod reconcile;
pub mod record;
pub mod stages;
pub mod window;

pub use entity::Entity;
pub use error::{TransformError, TransformResult};
pub use record::{FromRow, IntoRow, Record};
pub use stages::{default_stages, EntityRule, RuleStage, TransformStage};
