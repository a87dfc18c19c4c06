//! Range selection state and the day-cell classifier
//!
//! The original design scattered selection appearance across overlapping
//! boolean style flags; here every day cell is classified into exactly one
//! `DayCellState` by a pure function, so the renderer is a lookup and the
//! selection rules are unit-testable without a terminal.

use crate::model::date::DateBounds;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Which end of the range the next selection commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSide {
    #[default]
    Start,
    End,
}

impl FocusSide {
    pub fn name(&self) -> &'static str {
        match self {
            FocusSide::Start => "start",
            FocusSide::End => "end",
        }
    }

    pub fn toggled(self) -> FocusSide {
        match self {
            FocusSide::Start => FocusSide::End,
            FocusSide::End => FocusSide::Start,
        }
    }
}

/// A (possibly incomplete) date range.
///
/// Invariant: when both endpoints are present, `start <= end`. The `commit`
/// transition maintains it; the classifier assumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SelectionRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both endpoints committed.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Any endpoint committed.
    pub fn is_partial(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Commit `date` to the side indicated by `focus`, returning the new
    /// range and the focus the next selection should use.
    ///
    /// Committing a start drops an end that would precede it, then moves
    /// focus to the end side. Committing an end replaces the end in place;
    /// cells before the start are never offered for an end pick, so the
    /// ordering invariant holds by construction.
    pub fn commit(self, focus: FocusSide, date: NaiveDate) -> (SelectionRange, FocusSide) {
        match focus {
            FocusSide::Start => {
                let end = self.end.filter(|&end| end >= date);
                (
                    SelectionRange {
                        start: Some(date),
                        end,
                    },
                    FocusSide::End,
                )
            }
            FocusSide::End => (
                SelectionRange {
                    start: self.start,
                    end: Some(date),
                },
                FocusSide::End,
            ),
        }
    }
}

/// Dates excluded from selection: an explicit set plus an inclusive
/// `[min, max]` window.
#[derive(Debug, Clone, Default)]
pub struct DisabledSet {
    pub dates: BTreeSet<NaiveDate>,
    pub bounds: DateBounds,
}

impl DisabledSet {
    pub fn new(dates: BTreeSet<NaiveDate>, bounds: DateBounds) -> Self {
        Self { dates, bounds }
    }

    /// Whether `date` is excluded by the set or the window.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date) || !self.bounds.contains(date)
    }
}

/// Visual state of one day cell. Mutually exclusive; `classify_day` picks
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCellState {
    Unselected,
    RangeStart,
    RangeEnd,
    InRange,
    HoverPreviewInRange,
    HoverPreviewBoundary,
    Disabled,
}

/// Presentation variant of a day cell, orthogonal to its selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayVariant {
    Default,
    OtherMonth,
    Today,
}

/// Presentation variant for `date` rendered inside the month of `visible`.
pub fn day_variant(date: NaiveDate, visible: NaiveDate, today: NaiveDate) -> DayVariant {
    if date.month() != visible.month() || date.year() != visible.year() {
        DayVariant::OtherMonth
    } else if date == today {
        DayVariant::Today
    } else {
        DayVariant::Default
    }
}

/// Whether `date` can be picked given the current focus and constraints.
///
/// An end pick may never precede the committed start, regardless of the
/// disabled set.
fn pick_disabled(
    date: NaiveDate,
    range: &SelectionRange,
    focus: FocusSide,
    disabled: &DisabledSet,
) -> bool {
    if focus == FocusSide::End && range.start.is_some_and(|start| date < start) {
        return true;
    }
    disabled.is_disabled(date)
}

/// Classify one day cell.
///
/// Precedence, first match wins:
/// 1. exact match to a committed endpoint (endpoints stay visibly selected
///    even when the disabled set lists them),
/// 2. unpickable per focus rule / disabled set / bounds,
/// 3. strictly inside the committed range,
/// 4. hover previews (extending a complete range forward, or forming a
///    range when only the start exists),
/// 5. unselected.
///
/// Pure: no side effects, identical output for identical inputs.
pub fn classify_day(
    date: NaiveDate,
    range: &SelectionRange,
    hover: Option<NaiveDate>,
    focus: FocusSide,
    disabled: &DisabledSet,
) -> DayCellState {
    if range.start == Some(date) {
        return DayCellState::RangeStart;
    }
    if range.end == Some(date) {
        return DayCellState::RangeEnd;
    }

    if pick_disabled(date, range, focus, disabled) {
        return DayCellState::Disabled;
    }

    if let (Some(start), Some(end)) = (range.start, range.end) {
        if start < date && date < end {
            return DayCellState::InRange;
        }
    }

    // A hover over an unpickable cell previews nothing.
    let hover = hover.filter(|&h| !pick_disabled(h, range, focus, disabled));
    if let Some(hover) = hover {
        match (range.start, range.end) {
            // Complete range, hovering past the end: preview extending it.
            (Some(_), Some(end)) if hover > end => {
                if date == hover {
                    return DayCellState::HoverPreviewBoundary;
                }
                if end < date && date < hover {
                    return DayCellState::HoverPreviewInRange;
                }
            }
            // Only the start committed: preview the forming range toward the
            // hover, in either direction.
            (Some(start), None) if hover != start => {
                if date == hover {
                    return DayCellState::HoverPreviewBoundary;
                }
                let (lo, hi) = if start <= hover {
                    (start, hover)
                } else {
                    (hover, start)
                };
                if lo < date && date < hi {
                    return DayCellState::HoverPreviewInRange;
                }
            }
            _ => {}
        }
    }

    DayCellState::Unselected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::date::parse_iso;

    fn date(s: &str) -> NaiveDate {
        parse_iso(s).unwrap()
    }

    fn range(start: &str, end: &str) -> SelectionRange {
        SelectionRange::new(Some(date(start)), Some(date(end)))
    }

    fn disabled_dates(dates: &[&str]) -> DisabledSet {
        DisabledSet::new(
            dates.iter().map(|s| date(s)).collect(),
            DateBounds::unbounded(),
        )
    }

    #[test]
    fn test_committed_range_without_hover() {
        let range = range("2024-03-10", "2024-03-15");
        let disabled = DisabledSet::default();

        let classify = |d: &str| {
            classify_day(date(d), &range, None, FocusSide::Start, &disabled)
        };
        assert_eq!(classify("2024-03-10"), DayCellState::RangeStart);
        assert_eq!(classify("2024-03-15"), DayCellState::RangeEnd);
        assert_eq!(classify("2024-03-12"), DayCellState::InRange);
        assert_eq!(classify("2024-03-20"), DayCellState::Unselected);
        assert_eq!(classify("2024-03-09"), DayCellState::Unselected);
    }

    #[test]
    fn test_every_interior_date_is_in_range() {
        let range = range("2024-03-10", "2024-03-15");
        let disabled = DisabledSet::default();
        let mut d = date("2024-03-11");
        while d < date("2024-03-15") {
            assert_eq!(
                classify_day(d, &range, None, FocusSide::End, &disabled),
                DayCellState::InRange
            );
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_endpoints_beat_disabled_set() {
        let range = range("2024-03-10", "2024-03-15");
        let disabled = disabled_dates(&["2024-03-10", "2024-03-15"]);

        assert_eq!(
            classify_day(date("2024-03-10"), &range, None, FocusSide::End, &disabled),
            DayCellState::RangeStart
        );
        assert_eq!(
            classify_day(date("2024-03-15"), &range, None, FocusSide::End, &disabled),
            DayCellState::RangeEnd
        );
    }

    #[test]
    fn test_disabled_set_and_bounds() {
        let range = SelectionRange::default();
        let disabled = DisabledSet::new(
            [date("2024-03-12")].into(),
            DateBounds::new(Some(date("2024-03-05")), Some(date("2024-03-25"))),
        );

        let classify = |d: &str| {
            classify_day(date(d), &range, None, FocusSide::Start, &disabled)
        };
        assert_eq!(classify("2024-03-12"), DayCellState::Disabled);
        assert_eq!(classify("2024-03-04"), DayCellState::Disabled);
        assert_eq!(classify("2024-03-26"), DayCellState::Disabled);
        assert_eq!(classify("2024-03-05"), DayCellState::Unselected);
    }

    #[test]
    fn test_end_focus_disables_before_start() {
        // An end date may never precede its start, disabled set or not.
        let range = SelectionRange::new(Some(date("2024-03-10")), None);
        let disabled = DisabledSet::default();

        assert_eq!(
            classify_day(date("2024-03-05"), &range, None, FocusSide::End, &disabled),
            DayCellState::Disabled
        );
        // Same cell is pickable while focusing the start side.
        assert_eq!(
            classify_day(date("2024-03-05"), &range, None, FocusSide::Start, &disabled),
            DayCellState::Unselected
        );
    }

    #[test]
    fn test_single_sided_hover_preview() {
        let range = SelectionRange::new(Some(date("2024-03-10")), None);
        let disabled = DisabledSet::default();
        let hover = Some(date("2024-03-14"));

        let classify = |d: &str| {
            classify_day(date(d), &range, hover, FocusSide::End, &disabled)
        };
        assert_eq!(classify("2024-03-12"), DayCellState::HoverPreviewInRange);
        assert_eq!(classify("2024-03-13"), DayCellState::HoverPreviewInRange);
        assert_eq!(classify("2024-03-14"), DayCellState::HoverPreviewBoundary);
        assert_eq!(classify("2024-03-10"), DayCellState::RangeStart);
        assert_eq!(classify("2024-03-15"), DayCellState::Unselected);
    }

    #[test]
    fn test_single_sided_hover_preview_backwards() {
        // Hovering before the start previews the forming range while the
        // start side is focused; the end-focus rule would disable it.
        let range = SelectionRange::new(Some(date("2024-03-10")), None);
        let disabled = DisabledSet::default();
        let hover = Some(date("2024-03-06"));

        assert_eq!(
            classify_day(date("2024-03-08"), &range, hover, FocusSide::Start, &disabled),
            DayCellState::HoverPreviewInRange
        );
        assert_eq!(
            classify_day(date("2024-03-06"), &range, hover, FocusSide::Start, &disabled),
            DayCellState::HoverPreviewBoundary
        );
        assert_eq!(
            classify_day(date("2024-03-08"), &range, hover, FocusSide::End, &disabled),
            DayCellState::Disabled
        );
    }

    #[test]
    fn test_two_sided_hover_extends_past_end() {
        let range = range("2024-03-10", "2024-03-15");
        let disabled = DisabledSet::default();
        let hover = Some(date("2024-03-20"));

        let classify = |d: &str| {
            classify_day(date(d), &range, hover, FocusSide::End, &disabled)
        };
        assert_eq!(classify("2024-03-17"), DayCellState::HoverPreviewInRange);
        assert_eq!(classify("2024-03-20"), DayCellState::HoverPreviewBoundary);
        // The committed range keeps its own states underneath the preview.
        assert_eq!(classify("2024-03-12"), DayCellState::InRange);
        assert_eq!(classify("2024-03-10"), DayCellState::RangeStart);
        assert_eq!(classify("2024-03-15"), DayCellState::RangeEnd);
        assert_eq!(classify("2024-03-25"), DayCellState::Unselected);
    }

    #[test]
    fn test_two_sided_hover_inside_range_shows_no_preview() {
        // Hovering between the endpoints of a complete range: the committed
        // in-range states win over any preview.
        let range = range("2024-03-10", "2024-03-20");
        let disabled = DisabledSet::default();
        let hover = Some(date("2024-03-14"));

        assert_eq!(
            classify_day(date("2024-03-14"), &range, hover, FocusSide::End, &disabled),
            DayCellState::InRange
        );
        assert_eq!(
            classify_day(date("2024-03-12"), &range, hover, FocusSide::End, &disabled),
            DayCellState::InRange
        );
    }

    #[test]
    fn test_hover_over_disabled_cell_previews_nothing() {
        let range = SelectionRange::new(Some(date("2024-03-10")), None);
        let disabled = disabled_dates(&["2024-03-14"]);
        let hover = Some(date("2024-03-14"));

        assert_eq!(
            classify_day(date("2024-03-12"), &range, hover, FocusSide::End, &disabled),
            DayCellState::Unselected
        );
        assert_eq!(
            classify_day(date("2024-03-14"), &range, hover, FocusSide::End, &disabled),
            DayCellState::Disabled
        );
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let range = range("2024-03-10", "2024-03-15");
        let disabled = disabled_dates(&["2024-03-12"]);
        let hover = Some(date("2024-03-18"));

        for d in ["2024-03-09", "2024-03-12", "2024-03-16", "2024-03-18"] {
            let first = classify_day(date(d), &range, hover, FocusSide::End, &disabled);
            let second = classify_day(date(d), &range, hover, FocusSide::End, &disabled);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_commit_start_then_end() {
        let (range, focus) =
            SelectionRange::default().commit(FocusSide::Start, date("2024-03-10"));
        assert_eq!(range.start, Some(date("2024-03-10")));
        assert_eq!(range.end, None);
        assert_eq!(focus, FocusSide::End);

        let (range, focus) = range.commit(focus, date("2024-03-15"));
        assert_eq!(range.start, Some(date("2024-03-10")));
        assert_eq!(range.end, Some(date("2024-03-15")));
        assert_eq!(focus, FocusSide::End);
        assert!(range.is_complete());
    }

    #[test]
    fn test_commit_start_after_end_drops_end() {
        let existing = range("2024-03-10", "2024-03-15");
        let (next, _) = existing.commit(FocusSide::Start, date("2024-03-20"));
        assert_eq!(next.start, Some(date("2024-03-20")));
        assert_eq!(next.end, None);

        // Re-anchoring the start inside the range keeps the end.
        let (next, _) = existing.commit(FocusSide::Start, date("2024-03-12"));
        assert_eq!(next.start, Some(date("2024-03-12")));
        assert_eq!(next.end, Some(date("2024-03-15")));
    }

    #[test]
    fn test_day_variant() {
        let visible = date("2024-03-15");
        let today = date("2024-03-10");
        assert_eq!(day_variant(date("2024-03-10"), visible, today), DayVariant::Today);
        assert_eq!(
            day_variant(date("2024-02-29"), visible, today),
            DayVariant::OtherMonth
        );
        assert_eq!(
            day_variant(date("2024-03-11"), visible, today),
            DayVariant::Default
        );
        // Other-month outranks today at the grid edges.
        assert_eq!(
            day_variant(date("2024-03-10"), date("2024-02-15"), today),
            DayVariant::OtherMonth
        );
    }
}
