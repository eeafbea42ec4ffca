//! Conversion between month numbers and Notion multi-select options.

use crate::notion::SelectOption;

/// Unit appended to every month option name.
pub const MONTH_SUFFIX: &str = "월";

/// Map month numbers to multi-select options, preserving input order.
///
/// Values are not range checked.
pub fn months_to_options(months: &[i64]) -> Vec<SelectOption> {
    months
        .iter()
        .map(|m| SelectOption::named(format!("{}{}", m, MONTH_SUFFIX)))
        .collect()
}

/// Map multi-select options back to ascending month numbers.
///
/// Options whose name does not start with an integer are dropped.
pub fn options_to_months(options: &[SelectOption]) -> Vec<i64> {
    let mut months: Vec<i64> = options
        .iter()
        .filter_map(|o| parse_leading_int(&o.name))
        .collect();
    months.sort_unstable();
    months
}

/// Parse the integer at the start of `s`, ignoring whatever follows it.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn test_months_to_options_preserves_order() {
        let options = months_to_options(&[3, 1, 2]);
        assert_eq!(names(&options), vec!["3월", "1월", "2월"]);
    }

    #[test]
    fn test_months_to_options_accepts_any_integer() {
        let options = months_to_options(&[0, 13, -1]);
        assert_eq!(names(&options), vec!["0월", "13월", "-1월"]);
    }

    #[test]
    fn test_round_trip_sorts() {
        let months = vec![12, 3, 7, 1];
        assert_eq!(options_to_months(&months_to_options(&months)), vec![1, 3, 7, 12]);
    }

    #[test]
    fn test_non_numeric_options_dropped() {
        let options = vec![
            SelectOption::named("11월"),
            SelectOption::named("TBD"),
            SelectOption::named("2월"),
            SelectOption::named("월"),
        ];
        assert_eq!(options_to_months(&options), vec![2, 11]);
    }

    #[test]
    fn test_foreign_labels_tolerated() {
        let options = vec![
            SelectOption::named("5"),
            SelectOption::named(" 4 months"),
            SelectOption::named("6.5월"),
        ];
        assert_eq!(options_to_months(&options), vec![4, 5, 6]);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("10월"), Some(10));
        assert_eq!(parse_leading_int("-3월"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("월1"), None);
    }
}
