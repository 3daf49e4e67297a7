//! Integer-encoded date parsing

use chrono::NaiveDate;

/// Parse an 8-digit `YYYYMMDD` integer into a date.
///
/// Zero, any value whose decimal form is not exactly eight digits, and any
/// eight-digit value that is not a real calendar date all yield `None`.
pub fn parse_yyyymmdd(raw: Option<i64>) -> Option<NaiveDate> {
    let value = raw?;
    if value <= 0 {
        return None;
    }
    if value.to_string().len() != 8 {
        return None;
    }
    let year = i32::try_from(value / 10_000).ok()?;
    let month = u32::try_from(value / 100 % 100).ok()?;
    let day = u32::try_from(value % 100).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        assert_eq!(
            parse_yyyymmdd(Some(20230115)),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
    }

    #[test]
    fn test_zero_and_null() {
        assert_eq!(parse_yyyymmdd(Some(0)), None);
        assert_eq!(parse_yyyymmdd(None), None);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(parse_yyyymmdd(Some(202301)), None);
        assert_eq!(parse_yyyymmdd(Some(5489)), None);
        assert_eq!(parse_yyyymmdd(Some(320230115)), None);
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(parse_yyyymmdd(Some(-2023011)), None);
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(parse_yyyymmdd(Some(20231340)), None);
        assert_eq!(parse_yyyymmdd(Some(20230230)), None);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            parse_yyyymmdd(Some(20240229)),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }
}
