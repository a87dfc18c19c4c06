//! Civil-date helpers
//!
//! Everything date-shaped in the picker goes through this module: strict
//! `YYYY-MM-DD` parsing for values crossing the application boundary,
//! day-clamped month/year stepping, and the grid generators the calendar
//! views render from.

use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Literal format accepted at the application boundary
static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Parse a strict `YYYY-MM-DD` literal into a civil date.
///
/// Anything that does not match the literal format exactly (short fields,
/// extra characters, out-of-calendar days) yields `None`. Callers treat
/// `None` as fail-closed.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE_REGEX.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a civil date as its `YYYY-MM-DD` literal.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Step a date by whole months, clamping the day-of-month to the target
/// month's length (Mar 31 minus one month lands on Feb 29/28).
///
/// Saturates at the edges of the representable calendar range.
pub fn step_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let stepped = if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    stepped.unwrap_or(date)
}

/// Step a date by whole years with the same clamping rules.
pub fn step_years(date: NaiveDate, delta: i32) -> NaiveDate {
    step_months(date, delta.saturating_mul(12))
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    step_months(month_start(date), 1).pred_opt().unwrap_or(date)
}

/// First year of the decade containing `year` (2024 -> 2020).
pub fn decade_start(year: i32) -> i32 {
    year - year.rem_euclid(10)
}

/// An inclusive `[min, max]` date window. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Bounds that constrain nothing
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Whether a single date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }

    /// Whether the window `[first, last]` shares at least one day with the
    /// bounds. Drives arrow and cell disabling: a partially covered month
    /// or year stays reachable.
    pub fn overlaps(&self, first: NaiveDate, last: NaiveDate) -> bool {
        self.min.map_or(true, |min| last >= min) && self.max.map_or(true, |max| first <= max)
    }

    /// Whether the month containing `date` overlaps the bounds.
    pub fn overlaps_month(&self, date: NaiveDate) -> bool {
        self.overlaps(month_start(date), month_end(date))
    }

    /// Whether the calendar year overlaps the bounds.
    pub fn overlaps_year(&self, year: i32) -> bool {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return false;
        };
        self.overlaps(first, last)
    }

    /// Whether the decade containing `year` overlaps the bounds.
    pub fn overlaps_decade(&self, year: i32) -> bool {
        let begin = decade_start(year);
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(begin, 1, 1),
            NaiveDate::from_ymd_opt(begin + 9, 12, 31),
        ) else {
            return false;
        };
        self.overlaps(first, last)
    }
}

/// Number of day rows in the month grid
pub const GRID_WEEKS: usize = 6;
/// Number of columns (days per week) in the month grid
pub const GRID_DAYS: usize = 7;

/// The 42 dates shown for the month containing `pointer`, as six
/// Sunday-started weeks padded with leading/trailing other-month days.
pub fn month_grid(pointer: NaiveDate) -> [[NaiveDate; GRID_DAYS]; GRID_WEEKS] {
    let first = month_start(pointer);
    let lead = first.weekday().num_days_from_sunday() as u64;
    let mut cursor = first
        .checked_sub_days(Days::new(lead))
        .unwrap_or(first);

    let mut grid = [[first; GRID_DAYS]; GRID_WEEKS];
    for week in grid.iter_mut() {
        for cell in week.iter_mut() {
            *cell = cursor;
            cursor = cursor.succ_opt().unwrap_or(cursor);
        }
    }
    grid
}

/// Number of cells in the decade grid
pub const DECADE_CELLS: usize = 12;

/// The twelve years shown in the year view for the decade containing
/// `pointer`: one trailing year of the previous decade, the decade itself,
/// and one leading year of the next. Cells 0 and 11 belong to other decades.
pub fn decade_grid(pointer: NaiveDate) -> [i32; DECADE_CELLS] {
    let begin = decade_start(pointer.year());
    let mut years = [0; DECADE_CELLS];
    for (i, slot) in years.iter_mut().enumerate() {
        *slot = begin - 1 + i as i32;
    }
    years
}

/// Abbreviated month names for the month-view cells, January first.
pub const MONTH_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Two-letter weekday labels for the day-grid header, Sunday first.
pub const WEEKDAY_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(s: &str) -> NaiveDate {
        parse_iso(s).unwrap()
    }

    #[test]
    fn test_parse_iso_strict() {
        assert_eq!(
            parse_iso("2024-03-10"),
            NaiveDate::from_ymd_opt(2024, 3, 10)
        );
        assert!(parse_iso("2024-3-10").is_none());
        assert!(parse_iso("24-03-10").is_none());
        assert!(parse_iso("2024/03/10").is_none());
        assert!(parse_iso("2024-03-10T00:00:00").is_none());
        assert!(parse_iso("2024-13-01").is_none());
        assert!(parse_iso("2024-02-30").is_none());
        assert!(parse_iso("").is_none());
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(format_iso(date("2024-03-05")), "2024-03-05");
        assert_eq!(format_iso(date("0999-01-01")), "0999-01-01");
    }

    #[test]
    fn test_step_months_clamps_day() {
        assert_eq!(step_months(date("2024-03-31"), -1), date("2024-02-29"));
        assert_eq!(step_months(date("2023-01-31"), 1), date("2023-02-28"));
        assert_eq!(step_months(date("2024-03-01"), -1), date("2024-02-01"));
        assert_eq!(step_months(date("2024-12-15"), 1), date("2025-01-15"));
    }

    #[test]
    fn test_step_years() {
        assert_eq!(step_years(date("2024-02-29"), 1), date("2025-02-28"));
        assert_eq!(step_years(date("2024-06-15"), -10), date("2014-06-15"));
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(month_start(date("2024-02-29")), date("2024-02-01"));
        assert_eq!(month_end(date("2024-02-01")), date("2024-02-29"));
        assert_eq!(month_end(date("2023-02-01")), date("2023-02-28"));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = DateBounds::new(Some(date("2024-03-01")), Some(date("2024-03-31")));
        assert!(bounds.contains(date("2024-03-01")));
        assert!(bounds.contains(date("2024-03-31")));
        assert!(!bounds.contains(date("2024-02-29")));
        assert!(!bounds.contains(date("2024-04-01")));
        assert!(DateBounds::unbounded().contains(date("1900-01-01")));
    }

    #[test]
    fn test_month_overlap_partial() {
        // min mid-February: February still overlaps, January does not
        let bounds = DateBounds::new(Some(date("2024-02-15")), None);
        assert!(bounds.overlaps_month(date("2024-02-01")));
        assert!(!bounds.overlaps_month(date("2024-01-31")));
        assert!(bounds.overlaps_month(date("2024-03-01")));
    }

    #[test]
    fn test_year_and_decade_overlap() {
        let bounds = DateBounds::new(Some(date("2020-06-01")), Some(date("2021-06-01")));
        assert!(bounds.overlaps_year(2020));
        assert!(bounds.overlaps_year(2021));
        assert!(!bounds.overlaps_year(2019));
        assert!(!bounds.overlaps_year(2022));
        assert!(bounds.overlaps_decade(2025));
        assert!(!bounds.overlaps_decade(2035));
        assert!(!bounds.overlaps_decade(2015));
    }

    #[test]
    fn test_month_grid_shape() {
        let grid = month_grid(date("2024-03-15"));
        // March 2024 starts on a Friday; the grid opens on the prior Sunday
        assert_eq!(grid[0][0], date("2024-02-25"));
        assert_eq!(grid[0][0].weekday(), Weekday::Sun);
        assert_eq!(grid[0][5], date("2024-03-01"));
        assert_eq!(grid[5][6], date("2024-04-06"));

        // consecutive days throughout
        let flat: Vec<NaiveDate> = grid.iter().flatten().copied().collect();
        assert_eq!(flat.len(), GRID_WEEKS * GRID_DAYS);
        for pair in flat.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_month_grid_contains_whole_month() {
        let grid = month_grid(date("2024-02-01"));
        let flat: Vec<NaiveDate> = grid.iter().flatten().copied().collect();
        assert!(flat.contains(&date("2024-02-01")));
        assert!(flat.contains(&date("2024-02-29")));
    }

    #[test]
    fn test_decade_grid_edges() {
        let years = decade_grid(date("2024-03-10"));
        assert_eq!(years[0], 2019);
        assert_eq!(years[1], 2020);
        assert_eq!(years[10], 2029);
        assert_eq!(years[11], 2030);
    }

    #[test]
    fn test_decade_start() {
        assert_eq!(decade_start(2024), 2020);
        assert_eq!(decade_start(2020), 2020);
        assert_eq!(decade_start(1999), 1990);
    }
}
