//! Fixed-layout product key parsing
//!
//! A raw CRM product key looks like `CO-RF-FR-R92B-58`: the first five
//! characters name the category (`CO-RF`, stored as `CO_RF`), the sixth is a
//! separator, and everything from the seventh character on is the product
//! key proper (`FR-R92B-58`).

use crate::error::{TransformError, TransformResult};

const CATEGORY_WIDTH: usize = 5;
const KEY_OFFSET: usize = 6;

/// The two parts of a raw product key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductKey {
    pub category_id: String,
    pub product_key: String,
}

impl ProductKey {
    /// Split a raw key into category id and product key.
    ///
    /// Keys that are null or too short to hold a non-empty product key are
    /// rejected rather than truncated.
    pub fn parse(raw: Option<&str>) -> TransformResult<Self> {
        let Some(raw) = raw else {
            return Err(TransformError::MalformedProductKey {
                key: None,
                reason: "product key is null".to_string(),
            });
        };

        let chars: Vec<char> = raw.chars().collect();
        if chars.len() <= KEY_OFFSET {
            return Err(TransformError::MalformedProductKey {
                key: Some(raw.to_string()),
                reason: format!(
                    "expected at least {} characters, found {}",
                    KEY_OFFSET + 1,
                    chars.len()
                ),
            });
        }

        let category_id = chars[..CATEGORY_WIDTH]
            .iter()
            .collect::<String>()
            .replace('-', "_");
        let product_key = chars[KEY_OFFSET..].iter().collect();

        Ok(Self {
            category_id,
            product_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_key() {
        let key = ProductKey::parse(Some("CO-RF-FR-R92B-58")).unwrap();
        assert_eq!(key.category_id, "CO_RF");
        assert_eq!(key.product_key, "FR-R92B-58");
    }

    #[test]
    fn test_parse_minimum_length() {
        let key = ProductKey::parse(Some("AC-HE-H")).unwrap();
        assert_eq!(key.category_id, "AC_HE");
        assert_eq!(key.product_key, "H");
    }

    #[test]
    fn test_short_key_rejected() {
        let err = ProductKey::parse(Some("AC-HE-")).unwrap_err();
        assert_eq!(err.code(), "T001");
        assert!(err.to_string().contains("at least 7 characters"));
    }

    #[test]
    fn test_null_key_rejected() {
        let err = ProductKey::parse(None).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MalformedProductKey { key: None, .. }
        ));
    }

    #[test]
    fn test_multibyte_characters_counted_by_char() {
        let key = ProductKey::parse(Some("ÄB-CD-XYZ")).unwrap();
        assert_eq!(key.category_id, "ÄB_CD");
        assert_eq!(key.product_key, "XYZ");
    }
}
