//! Strongly-typed table name wrapper.

use crate::sql_utils::quote_qualified;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Schema-qualified table name such as `silver.crm_cust_info`.
///
/// Keeps bronze/silver table references from being mixed up with column
/// names or other free-form strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    /// Build a qualified name from a schema and a bare table name.
    pub fn qualified(schema: &str, table: &str) -> Self {
        Self(format!("{}.{}", schema, table))
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier-quoted form, safe to splice into SQL.
    pub fn quoted(&self) -> String {
        quote_qualified(&self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for TableName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified() {
        let name = TableName::qualified("silver", "crm_cust_info");
        assert_eq!(name.as_str(), "silver.crm_cust_info");
        assert_eq!(name.to_string(), "silver.crm_cust_info");
    }

    #[test]
    fn test_quoted() {
        let name = TableName::qualified("bronze", "erp_loc_a101");
        assert_eq!(name.quoted(), r#""bronze"."erp_loc_a101""#);
    }
}
