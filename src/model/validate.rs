//! Stateless validation predicates over boundary date strings
//!
//! Values crossing the application boundary are `YYYY-MM-DD` literals;
//! these predicates decide whether a selection is acceptable without ever
//! raising. Anything malformed fails closed.

use crate::model::date::parse_iso;

/// Validate a committed range against the disabled set and an optional
/// inclusive `[min, max]` window.
///
/// False when an endpoint is missing or malformed, the range is inverted,
/// an endpoint appears in `disabled_dates`, a supplied bound fails the
/// `YYYY-MM-DD` literal format, or an endpoint falls outside the window.
pub fn validate_range(
    start: Option<&str>,
    end: Option<&str>,
    disabled_dates: &[String],
    between: Option<(&str, &str)>,
) -> bool {
    let (Some(start_str), Some(end_str)) = (start, end) else {
        return false;
    };
    let (Some(start_date), Some(end_date)) = (parse_iso(start_str), parse_iso(end_str)) else {
        return false;
    };

    if start_date > end_date {
        return false;
    }

    if disabled_dates
        .iter()
        .any(|d| d == start_str || d == end_str)
    {
        return false;
    }

    if let Some((min_str, max_str)) = between {
        let (Some(min), Some(max)) = (parse_iso(min_str), parse_iso(max_str)) else {
            return false;
        };
        if start_date < min || start_date > max || end_date < min || end_date > max {
            return false;
        }
    }

    true
}

/// Validate a single date value under the same rules.
pub fn validate_single(
    value: &str,
    disabled_dates: &[String],
    between: Option<(&str, &str)>,
) -> bool {
    if value.is_empty() {
        return false;
    }
    let Some(date) = parse_iso(value) else {
        return false;
    };

    if disabled_dates.iter().any(|d| d == value) {
        return false;
    }

    if let Some((min_str, max_str)) = between {
        let (Some(min), Some(max)) = (parse_iso(min_str), parse_iso(max_str)) else {
            return false;
        };
        if date < min || date > max {
            return false;
        }
    }

    true
}
