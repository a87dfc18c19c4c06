//! Calendar view navigator
//!
//! State machine governing which granularity the calendar shows (day grid,
//! month overlay, year overlay) and what one navigation step means in each.
//! It tracks the visible pointer separately from the committed selection:
//! paging around never touches the selected range.

use crate::model::date::{self, DateBounds};
use chrono::{Datelike, NaiveDate};

/// Which granularity the calendar currently displays.
///
/// `Day` is the base grid; `Month` and `Year` are mutually exclusive
/// overlays on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    Day,
    Month,
    Year,
}

/// Signalled to the host when an action dismisses the picker itself rather
/// than an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    /// Cancel pressed on the day grid: selection flow abandoned.
    Reset,
    /// Confirm pressed on the day grid: selection flow done.
    Confirmed,
}

/// Navigation state for the calendar header and overlays.
///
/// `pointer` is what every view renders from. `pending` is the month the day
/// grid returns to when an overlay closes without a pick: paging inside an
/// overlay is an excursion, committed only by selecting a cell.
#[derive(Debug, Clone)]
pub struct ViewNavigator {
    view: CalendarView,
    pointer: NaiveDate,
    pending: NaiveDate,
    initial: NaiveDate,
}

impl ViewNavigator {
    pub fn new(initial: NaiveDate) -> Self {
        Self {
            view: CalendarView::Day,
            pointer: initial,
            pending: initial,
            initial,
        }
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    /// The date every view currently renders from.
    pub fn pointer(&self) -> NaiveDate {
        self.pointer
    }

    /// The month/year pending commit while an overlay is open.
    pub fn pending(&self) -> NaiveDate {
        self.pending
    }

    /// Jump the visible pointer (e.g. "go to today"). Does not change view.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.pointer = date;
        self.pending = date;
    }

    /// Toggle the month overlay.
    pub fn toggle_month_view(&mut self) {
        match self.view {
            CalendarView::Day => {
                self.pending = self.pointer;
                self.view = CalendarView::Month;
            }
            CalendarView::Month => self.close_overlay(),
            CalendarView::Year => self.view = CalendarView::Month,
        }
    }

    /// Toggle the year overlay. From the month overlay this closes back to
    /// the day grid: the two overlays are mutually exclusive.
    pub fn toggle_year_view(&mut self) {
        match self.view {
            CalendarView::Day => {
                self.pending = self.pointer;
                self.view = CalendarView::Year;
            }
            CalendarView::Month | CalendarView::Year => self.close_overlay(),
        }
    }

    /// Commit an overlay pick: the chosen month/year becomes the visible
    /// month and the overlay closes. No-op on the day grid, where picking a
    /// cell is the host's selection concern.
    pub fn select_cell(&mut self, date: NaiveDate) {
        if self.view == CalendarView::Day {
            return;
        }
        self.pointer = date;
        self.pending = date;
        self.view = CalendarView::Day;
    }

    /// One step backward: a month, a year, or a decade depending on view.
    pub fn step_back(&mut self) {
        self.step(-1);
    }

    /// One step forward: a month, a year, or a decade depending on view.
    pub fn step_forward(&mut self) {
        self.step(1);
    }

    fn step(&mut self, direction: i32) {
        match self.view {
            CalendarView::Day => {
                self.pointer = date::step_months(self.pointer, direction);
                self.pending = self.pointer;
            }
            // Overlay paging moves only the pointer; the excursion is
            // committed by select_cell, discarded by toggle-close.
            CalendarView::Month => {
                self.pointer = date::step_years(self.pointer, direction);
            }
            CalendarView::Year => {
                self.pointer = date::step_years(self.pointer, 10 * direction);
            }
        }
    }

    /// Whether stepping backward is disabled: the target window (month,
    /// year, or decade) has no overlap with the bounds.
    pub fn step_back_disabled(&self, bounds: &DateBounds) -> bool {
        self.step_disabled(-1, bounds)
    }

    /// Whether stepping forward is disabled.
    pub fn step_forward_disabled(&self, bounds: &DateBounds) -> bool {
        self.step_disabled(1, bounds)
    }

    fn step_disabled(&self, direction: i32, bounds: &DateBounds) -> bool {
        match self.view {
            CalendarView::Day => {
                !bounds.overlaps_month(date::step_months(self.pointer, direction))
            }
            CalendarView::Month => {
                !bounds.overlaps_year(date::step_years(self.pointer, direction).year())
            }
            CalendarView::Year => {
                !bounds.overlaps_decade(date::step_years(self.pointer, 10 * direction).year())
            }
        }
    }

    /// Cancel: restore the initial pointer. Closes an open overlay; on the
    /// day grid it dismisses the picker with `Dismiss::Reset`.
    pub fn cancel(&mut self) -> Option<Dismiss> {
        self.pointer = self.initial;
        self.pending = self.initial;
        if self.view == CalendarView::Day {
            Some(Dismiss::Reset)
        } else {
            self.view = CalendarView::Day;
            None
        }
    }

    /// Confirm: commit the pending pointer. Closes an open overlay; on the
    /// day grid it dismisses the picker with `Dismiss::Confirmed`.
    pub fn confirm(&mut self) -> Option<Dismiss> {
        self.pointer = self.pending;
        if self.view == CalendarView::Day {
            Some(Dismiss::Confirmed)
        } else {
            self.view = CalendarView::Day;
            None
        }
    }

    fn close_overlay(&mut self) {
        self.pointer = self.pending;
        self.view = CalendarView::Day;
    }

    /// Month label for the header ("March"). Hidden by the header while an
    /// overlay is open.
    pub fn month_label(&self) -> String {
        self.pointer.format("%B").to_string()
    }

    /// Year label for the header: the pointer's year, or the decade span
    /// while the year overlay is open.
    pub fn year_label(&self) -> String {
        if self.view == CalendarView::Year {
            let begin = date::decade_start(self.pointer.year());
            format!("{} to {}", begin, begin + 9)
        } else {
            self.pointer.format("%Y").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::date::parse_iso;

    fn date(s: &str) -> NaiveDate {
        parse_iso(s).unwrap()
    }

    fn nav(s: &str) -> ViewNavigator {
        ViewNavigator::new(date(s))
    }

    #[test]
    fn test_initial_state() {
        let nav = nav("2024-03-01");
        assert_eq!(nav.view(), CalendarView::Day);
        assert_eq!(nav.pointer(), date("2024-03-01"));
        assert_eq!(nav.pending(), date("2024-03-01"));
    }

    #[test]
    fn test_day_steps_by_month() {
        let mut nav = nav("2024-03-01");
        nav.step_back();
        assert_eq!(nav.pointer(), date("2024-02-01"));
        nav.step_forward();
        nav.step_forward();
        assert_eq!(nav.pointer(), date("2024-04-01"));
        assert_eq!(nav.pending(), date("2024-04-01"));
    }

    #[test]
    fn test_month_view_steps_by_year() {
        let mut nav = nav("2024-03-15");
        nav.toggle_month_view();
        assert_eq!(nav.view(), CalendarView::Month);
        nav.step_back();
        assert_eq!(nav.pointer(), date("2023-03-15"));
        // the pending month is untouched by overlay paging
        assert_eq!(nav.pending(), date("2024-03-15"));
    }

    #[test]
    fn test_year_view_steps_by_decade() {
        let mut nav = nav("2024-03-15");
        nav.toggle_year_view();
        assert_eq!(nav.view(), CalendarView::Year);
        nav.step_forward();
        assert_eq!(nav.pointer(), date("2034-03-15"));
        nav.step_back();
        nav.step_back();
        assert_eq!(nav.pointer(), date("2014-03-15"));
    }

    #[test]
    fn test_overlay_close_discards_excursion() {
        let mut nav = nav("2024-03-15");
        nav.toggle_month_view();
        nav.step_back();
        nav.step_back();
        assert_eq!(nav.pointer(), date("2022-03-15"));

        // re-clicking the toggle abandons the paging excursion
        nav.toggle_month_view();
        assert_eq!(nav.view(), CalendarView::Day);
        assert_eq!(nav.pointer(), date("2024-03-15"));
    }

    #[test]
    fn test_overlay_select_commits_cell() {
        let mut nav = nav("2024-03-15");
        nav.toggle_year_view();
        nav.step_forward();
        nav.select_cell(date("2035-03-15"));
        assert_eq!(nav.view(), CalendarView::Day);
        assert_eq!(nav.pointer(), date("2035-03-15"));
        assert_eq!(nav.pending(), date("2035-03-15"));
    }

    #[test]
    fn test_year_toggle_closes_month_overlay() {
        let mut nav = nav("2024-03-15");
        nav.toggle_month_view();
        nav.toggle_year_view();
        assert_eq!(nav.view(), CalendarView::Day);

        nav.toggle_year_view();
        assert_eq!(nav.view(), CalendarView::Year);
        nav.toggle_month_view();
        assert_eq!(nav.view(), CalendarView::Month);
    }

    #[test]
    fn test_arrow_disabled_by_target_window_overlap() {
        // min mid-February: stepping back from March is allowed because the
        // target month still overlaps the bound
        let bounds = DateBounds::new(Some(date("2024-02-15")), None);
        let mut nav = nav("2024-03-01");
        assert!(!nav.step_back_disabled(&bounds));
        nav.step_back();
        assert_eq!(nav.pointer(), date("2024-02-01"));

        // from February the target month (January) is fully outside
        assert!(nav.step_back_disabled(&bounds));
        assert!(!nav.step_forward_disabled(&bounds));
    }

    #[test]
    fn test_arrow_disabled_respects_view_granularity() {
        let bounds = DateBounds::new(
            Some(date("2023-06-01")),
            Some(date("2025-06-01")),
        );
        let mut nav = nav("2024-03-15");

        nav.toggle_month_view();
        assert!(!nav.step_back_disabled(&bounds));
        nav.step_back();
        assert!(nav.step_back_disabled(&bounds));

        let mut nav = ViewNavigator::new(date("2024-03-15"));
        nav.toggle_year_view();
        assert!(nav.step_back_disabled(&bounds));
        assert!(nav.step_forward_disabled(&bounds));
    }

    #[test]
    fn test_cancel_in_overlay_returns_to_day() {
        let mut nav = nav("2024-03-15");
        nav.toggle_month_view();
        nav.step_forward();
        assert_eq!(nav.cancel(), None);
        assert_eq!(nav.view(), CalendarView::Day);
        assert_eq!(nav.pointer(), date("2024-03-15"));
    }

    #[test]
    fn test_cancel_on_day_grid_dismisses() {
        let mut nav = nav("2024-03-15");
        nav.step_forward();
        assert_eq!(nav.cancel(), Some(Dismiss::Reset));
        assert_eq!(nav.pointer(), date("2024-03-15"));
    }

    #[test]
    fn test_confirm_commits_pending() {
        let mut nav = nav("2024-03-15");
        nav.toggle_month_view();
        nav.step_forward();
        assert_eq!(nav.confirm(), None);
        assert_eq!(nav.view(), CalendarView::Day);
        assert_eq!(nav.pointer(), date("2024-03-15"));

        assert_eq!(nav.confirm(), Some(Dismiss::Confirmed));
    }

    #[test]
    fn test_header_labels() {
        let mut nav = nav("2024-03-15");
        assert_eq!(nav.month_label(), "March");
        assert_eq!(nav.year_label(), "2024");

        nav.toggle_year_view();
        assert_eq!(nav.year_label(), "2020 to 2029");
    }
}
