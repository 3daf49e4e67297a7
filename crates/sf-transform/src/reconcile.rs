//! Sales and price validation
//!
//! Both rules read only the original bronze values. Neither sees the other's
//! result, so a row where sales and price are both invalid has its price
//! derived from the original sales, not the recomputed one.
//!
//! Null handling follows SQL three-valued logic: comparing against a null
//! is never "inconsistent", and arithmetic with a null operand is null. A
//! zero price is treated like a null one for the consistency check, since
//! it carries no unit price to compare against.

/// Recomputed sales amount.
///
/// `quantity * |price|` when the original sales is null, not positive, or
/// differs from `quantity * |price|`; otherwise the original sales. The
/// difference check only applies when the original price is non-null and
/// non-zero.
pub fn sales_final(sales: Option<i64>, quantity: Option<i64>, price: Option<i64>) -> Option<i64> {
    let expected = match (quantity, price) {
        (Some(q), Some(p)) => p.checked_abs().and_then(|p| q.checked_mul(p)),
        _ => None,
    };

    let keep_original = match sales {
        Some(s) if s > 0 => match (price, expected) {
            (Some(0), _) | (_, None) => true,
            (_, Some(e)) => s == e,
        },
        _ => false,
    };

    if keep_original {
        sales
    } else {
        expected
    }
}

/// Recomputed unit price.
///
/// `sales / quantity` when the original price is null or not positive;
/// otherwise the original price. A zero quantity yields null instead of a
/// division error. Division truncates toward zero.
pub fn price_final(sales: Option<i64>, quantity: Option<i64>, price: Option<i64>) -> Option<i64> {
    match price {
        Some(p) if p > 0 => Some(p),
        _ => match (sales, quantity) {
            (Some(s), Some(q)) => s.checked_div(q),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sales_recomputed() {
        assert_eq!(sales_final(Some(0), Some(2), Some(10)), Some(20));
        assert_eq!(price_final(Some(0), Some(2), Some(10)), Some(10));
    }

    #[test]
    fn test_consistent_sales_with_zero_price() {
        assert_eq!(sales_final(Some(20), Some(2), Some(0)), Some(20));
        assert_eq!(price_final(Some(20), Some(2), Some(0)), Some(10));
    }

    #[test]
    fn test_null_price_keeps_positive_sales() {
        assert_eq!(sales_final(Some(100), Some(5), None), Some(100));
        assert_eq!(price_final(Some(100), Some(5), None), Some(20));
    }

    #[test]
    fn test_inconsistent_sales_recomputed() {
        assert_eq!(sales_final(Some(50), Some(3), Some(10)), Some(30));
        assert_eq!(price_final(Some(50), Some(3), Some(10)), Some(10));
    }

    #[test]
    fn test_negative_price_uses_absolute_value() {
        assert_eq!(sales_final(Some(30), Some(3), Some(-10)), Some(30));
        assert_eq!(sales_final(None, Some(3), Some(-10)), Some(30));
        // The negative price itself is invalid and rederived from sales
        assert_eq!(price_final(Some(30), Some(3), Some(-10)), Some(10));
    }

    #[test]
    fn test_both_invalid_are_computed_from_originals() {
        // sales invalid (negative), price invalid (null): sales cannot be
        // recomputed without a price, and price uses the original sales.
        assert_eq!(sales_final(Some(-40), Some(4), None), None);
        assert_eq!(price_final(Some(-40), Some(4), None), Some(-10));

        // sales invalid (null), price invalid (zero)
        assert_eq!(sales_final(None, Some(4), Some(0)), Some(0));
        assert_eq!(price_final(None, Some(4), Some(0)), None);
    }

    #[test]
    fn test_zero_quantity_yields_null_price() {
        assert_eq!(price_final(Some(10), Some(0), None), None);
        assert_eq!(price_final(Some(10), Some(0), Some(-1)), None);
    }

    #[test]
    fn test_null_quantity() {
        assert_eq!(sales_final(Some(10), None, Some(5)), Some(10));
        assert_eq!(sales_final(None, None, Some(5)), None);
        assert_eq!(price_final(Some(10), None, None), None);
    }

    #[test]
    fn test_integer_division_truncates() {
        assert_eq!(price_final(Some(10), Some(3), None), Some(3));
    }
}
