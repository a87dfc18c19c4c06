//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App owns the picker state (selection range, focus side,
//! view navigator, constraints) and is the only place that mutates it;
//! everything below reacts to Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_calendar, draw_header, draw_month_grid, draw_status_bar,
    draw_year_grid, CalendarComponent, HeaderComponent, HelpDialog, MonthGridComponent,
    PickerContext, QuitDialog, YearGridComponent,
};
use crate::config::Config;
use crate::model::date::format_iso;
use crate::model::modal::{Modal, ModalStack};
use crate::model::navigator::{CalendarView, Dismiss, ViewNavigator};
use crate::model::selection::{classify_day, DayCellState, DisabledSet, FocusSide, SelectionRange};
use crate::model::validate;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// The committed selection
    pub range: SelectionRange,

    /// Which side of the range the next pick commits
    pub focus: FocusSide,

    /// Day/month/year view state machine
    pub navigator: ViewNavigator,

    /// Disabled dates and the selectable window
    pub disabled: DisabledSet,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// The confirmed range, printed by main after terminal teardown
    pub result: Option<(NaiveDate, NaiveDate)>,

    /// Error message to display in the status line
    pub error: Option<String>,

    /// Today, fixed at startup
    pub today: NaiveDate,

    /// Source config, kept for the validation boundary strings
    config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub header: HeaderComponent,
    pub calendar: CalendarComponent,
    pub month_grid: MonthGridComponent,
    pub year_grid: YearGridComponent,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance from the on-disk config
    pub fn new() -> App {
        let config = match Config::load() {
            Some(config) => config,
            None => {
                // first run: seed a config file the user can edit
                let config = Config::default();
                let _ = config.save();
                config
            }
        };
        Self::with_config(config, Local::now().date_naive())
    }

    /// Create an App from an explicit config and a fixed "today"
    pub fn with_config(config: Config, today: NaiveDate) -> App {
        let initial = config.initial_date(today);
        App {
            range: SelectionRange::default(),
            focus: FocusSide::default(),
            navigator: ViewNavigator::new(initial),
            disabled: config.disabled_set(),
            modals: ModalStack::new(),
            should_quit: false,
            result: None,
            error: None,
            today,
            config,
            header: HeaderComponent::default(),
            calendar: CalendarComponent::new(initial),
            month_grid: MonthGridComponent::default(),
            year_grid: YearGridComponent::default(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog::default(),
        }
    }

    /// Whether the current selection passes range validation.
    ///
    /// Validation runs over the boundary-string form of the selection, so
    /// the config's raw (possibly malformed) bound strings keep their
    /// fail-closed behavior.
    fn selection_valid(&self) -> bool {
        let start = self.range.start.map(format_iso);
        let end = self.range.end.map(format_iso);
        let between = match (&self.config.min_date, &self.config.max_date) {
            (Some(min), Some(max)) => Some((min.as_str(), max.as_str())),
            _ => None,
        };
        validate::validate_range(
            start.as_deref(),
            end.as_deref(),
            &self.config.disabled_dates,
            between,
        )
    }

    /// Pick a day-grid date, if it is pickable under the current state.
    fn select_day(&mut self, date: NaiveDate) {
        let state = classify_day(date, &self.range, None, self.focus, &self.disabled);
        if state == DayCellState::Disabled {
            return;
        }
        let (range, focus) = self.range.commit(self.focus, date);
        self.range = range;
        self.focus = focus;
        // hover resets on every commit
        self.calendar.clear_hover();
        self.calendar.set_cursor(date);
        self.error = None;
    }

    /// Commit an overlay cell pick into the navigator, if the target
    /// window overlaps the selectable bound.
    fn select_overlay_cell(&mut self, date: NaiveDate) {
        let enabled = match self.navigator.view() {
            CalendarView::Month => self.disabled.bounds.overlaps_month(date),
            CalendarView::Year => self.disabled.bounds.overlaps_year(date.year()),
            CalendarView::Day => return,
        };
        if enabled {
            self.navigator.select_cell(date);
            self.calendar.set_cursor(self.navigator.pointer());
        }
    }

    /// Keep the visible month in sync with the keyboard cursor.
    fn follow_cursor(&mut self) {
        let cursor = self.calendar.cursor();
        let pointer = self.navigator.pointer();
        if cursor.year() != pointer.year() || cursor.month() != pointer.month() {
            self.navigator.jump_to(cursor);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top() {
            return match modal {
                Modal::Help { .. } => self.help_dialog.handle_key_event(key),
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            };
        }

        match self.navigator.view() {
            CalendarView::Day => self.calendar.handle_key_event(key),
            CalendarView::Month => self.month_grid.handle_key_event(key),
            CalendarView::Year => self.year_grid.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // dialogs are keyboard-driven
        if !self.modals.is_empty() {
            return Ok(None);
        }

        if let Some(action) = self.header.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }

        match self.navigator.view() {
            CalendarView::Day => self.calendar.handle_mouse_event(mouse),
            CalendarView::Month => self.month_grid.handle_mouse_event(mouse),
            CalendarView::Year => self.year_grid.handle_mouse_event(mouse),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::Quit => {
                if self.range.is_partial() {
                    return Ok(Some(Action::OpenQuitDialog));
                }
                return Ok(Some(Action::ForceQuit));
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Cursor Movement (day grid; overlays move their own cursors)
            // ─────────────────────────────────────────────────────────────────
            Action::CursorLeft => {
                self.calendar.move_cursor(-1);
                self.follow_cursor();
            }
            Action::CursorRight => {
                self.calendar.move_cursor(1);
                self.follow_cursor();
            }
            Action::CursorUp => {
                self.calendar.move_cursor(-7);
                self.follow_cursor();
            }
            Action::CursorDown => {
                self.calendar.move_cursor(7);
                self.follow_cursor();
            }

            // ─────────────────────────────────────────────────────────────────
            // Paging
            // ─────────────────────────────────────────────────────────────────
            Action::StepBack => {
                if !self.navigator.step_back_disabled(&self.disabled.bounds) {
                    self.navigator.step_back();
                    if self.navigator.view() == CalendarView::Day {
                        self.calendar.set_cursor(self.navigator.pointer());
                    }
                }
            }
            Action::StepForward => {
                if !self.navigator.step_forward_disabled(&self.disabled.bounds) {
                    self.navigator.step_forward();
                    if self.navigator.view() == CalendarView::Day {
                        self.calendar.set_cursor(self.navigator.pointer());
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Selection
            // ─────────────────────────────────────────────────────────────────
            Action::SelectCursor => {
                return Ok(Some(Action::SelectDate(self.calendar.cursor())));
            }
            Action::SelectDate(date) => match self.navigator.view() {
                CalendarView::Day => self.select_day(date),
                CalendarView::Month | CalendarView::Year => self.select_overlay_cell(date),
            },
            Action::HoverDate(date) => {
                if self.navigator.view() == CalendarView::Day {
                    self.calendar.set_hover(date);
                }
            }
            Action::ClearHover => {
                self.calendar.clear_hover();
            }
            Action::SwitchFocus => {
                self.focus = self.focus.toggled();
                self.error = None;
            }
            Action::JumpToday => {
                self.navigator.jump_to(self.today);
                self.calendar.set_cursor(self.today);
            }

            // ─────────────────────────────────────────────────────────────────
            // View Toggles
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleMonthView => {
                self.navigator.toggle_month_view();
                match self.navigator.view() {
                    CalendarView::Month => self.month_grid.reset(self.navigator.pointer()),
                    CalendarView::Day => self.calendar.set_cursor(self.navigator.pointer()),
                    CalendarView::Year => {}
                }
            }
            Action::ToggleYearView => {
                self.navigator.toggle_year_view();
                match self.navigator.view() {
                    CalendarView::Year => self.year_grid.reset(self.navigator.pointer()),
                    CalendarView::Day => self.calendar.set_cursor(self.navigator.pointer()),
                    CalendarView::Month => {}
                }
            }
            Action::Confirm => match self.navigator.confirm() {
                None => {
                    // overlay committed its pending pointer
                    self.calendar.set_cursor(self.navigator.pointer());
                }
                Some(Dismiss::Confirmed) => {
                    if let (Some(start), Some(end)) = (self.range.start, self.range.end) {
                        if self.selection_valid() {
                            self.result = Some((start, end));
                            self.should_quit = true;
                        } else {
                            self.error = Some("selection not allowed".to_string());
                        }
                    } else {
                        self.error = Some("pick a start and an end date first".to_string());
                    }
                }
                Some(Dismiss::Reset) => {}
            },
            Action::Cancel => match self.navigator.cancel() {
                None => {
                    // overlay closed, pointer restored
                    self.calendar.set_cursor(self.navigator.pointer());
                }
                Some(Dismiss::Reset) => {
                    self.range = SelectionRange::default();
                    self.focus = FocusSide::default();
                    self.calendar.clear_hover();
                    self.calendar.set_cursor(self.navigator.pointer());
                    self.error = None;
                }
                Some(Dismiss::Confirmed) => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            // No component emits `ConfirmModal` in this app (dialogs emit
            // `ForceQuit`/`CloseModal` directly); arm present for exhaustiveness.
            Action::ConfirmModal => {}
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);
        let ctx = PickerContext {
            navigator: &self.navigator,
            range: &self.range,
            focus: self.focus,
            disabled: &self.disabled,
            today: self.today,
            valid: self.selection_valid(),
            error: self.error.as_deref(),
        };

        draw_header(frame, layout.header, &mut self.header, &ctx)?;

        match self.navigator.view() {
            CalendarView::Day => draw_calendar(frame, layout.body, &mut self.calendar, &ctx)?,
            CalendarView::Month => {
                draw_month_grid(frame, layout.body, &mut self.month_grid, &ctx)?
            }
            CalendarView::Year => draw_year_grid(frame, layout.body, &mut self.year_grid, &ctx)?,
        }

        draw_status_bar(frame, layout.status, &ctx);

        match self.modals.top() {
            Some(Modal::Help { .. }) => self.help_dialog.draw(frame, area)?,
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::date::parse_iso;

    fn date(s: &str) -> NaiveDate {
        parse_iso(s).unwrap()
    }

    fn app() -> App {
        let config = Config {
            initial_date: Some("2024-03-01".to_string()),
            ..Config::default()
        };
        App::with_config(config, date("2024-03-10"))
    }

    /// Process an action and any follow-ups, as the main loop does.
    fn drive(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_pick_start_then_end_then_confirm() {
        let mut app = app();
        drive(&mut app, Action::SelectDate(date("2024-03-10")));
        assert_eq!(app.range.start, Some(date("2024-03-10")));
        assert_eq!(app.focus, FocusSide::End);

        drive(&mut app, Action::SelectDate(date("2024-03-15")));
        assert_eq!(app.range.end, Some(date("2024-03-15")));

        drive(&mut app, Action::Confirm);
        assert_eq!(app.result, Some((date("2024-03-10"), date("2024-03-15"))));
        assert!(app.should_quit);
    }

    #[test]
    fn test_end_pick_before_start_is_ignored() {
        let mut app = app();
        drive(&mut app, Action::SelectDate(date("2024-03-10")));
        drive(&mut app, Action::SelectDate(date("2024-03-05")));
        // the pick never lands: an end may not precede its start
        assert_eq!(app.range.start, Some(date("2024-03-10")));
        assert_eq!(app.range.end, None);
    }

    #[test]
    fn test_disabled_date_pick_is_ignored() {
        let config = Config {
            initial_date: Some("2024-03-01".to_string()),
            disabled_dates: vec!["2024-03-12".to_string()],
            ..Config::default()
        };
        let mut app = App::with_config(config, date("2024-03-10"));
        drive(&mut app, Action::SelectDate(date("2024-03-12")));
        assert_eq!(app.range.start, None);
    }

    #[test]
    fn test_confirm_incomplete_selection_sets_error() {
        let mut app = app();
        drive(&mut app, Action::SelectDate(date("2024-03-10")));
        drive(&mut app, Action::Confirm);
        assert!(app.result.is_none());
        assert!(!app.should_quit);
        assert!(app.error.is_some());
    }

    #[test]
    fn test_confirm_out_of_bounds_selection_sets_error() {
        // bounds allow the pick window but validation runs on the raw
        // config strings; a selection outside them never confirms
        let config = Config {
            initial_date: Some("2024-03-01".to_string()),
            min_date: Some("2024-03-05".to_string()),
            max_date: Some("2024-03-20".to_string()),
            ..Config::default()
        };
        let mut app = App::with_config(config, date("2024-03-10"));
        app.range = SelectionRange::new(Some(date("2024-03-01")), Some(date("2024-03-15")));
        drive(&mut app, Action::Confirm);
        assert!(app.result.is_none());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_cancel_resets_selection_and_pointer() {
        let mut app = app();
        drive(&mut app, Action::SelectDate(date("2024-03-10")));
        drive(&mut app, Action::StepForward);
        assert_eq!(app.navigator.pointer(), date("2024-04-01"));

        drive(&mut app, Action::Cancel);
        assert_eq!(app.range, SelectionRange::default());
        assert_eq!(app.focus, FocusSide::Start);
        assert_eq!(app.navigator.pointer(), date("2024-03-01"));
        assert_eq!(app.calendar.hover(), None);
    }

    #[test]
    fn test_quit_with_partial_selection_asks_first() {
        let mut app = app();
        drive(&mut app, Action::SelectDate(date("2024-03-10")));
        drive(&mut app, Action::Quit);
        assert!(!app.should_quit);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        drive(&mut app, Action::ForceQuit);
        assert!(app.should_quit);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_quit_without_selection_is_immediate() {
        let mut app = app();
        drive(&mut app, Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_cursor_movement_pages_the_visible_month() {
        let mut app = app();
        // cursor starts on the initial date; moving back one day crosses
        // into February and the visible month follows
        drive(&mut app, Action::CursorLeft);
        assert_eq!(app.calendar.cursor(), date("2024-02-29"));
        assert_eq!(app.navigator.pointer(), date("2024-02-29"));
    }

    #[test]
    fn test_overlay_pick_changes_month_not_selection() {
        let mut app = app();
        drive(&mut app, Action::SelectDate(date("2024-03-10")));

        drive(&mut app, Action::ToggleMonthView);
        assert_eq!(app.navigator.view(), CalendarView::Month);
        drive(&mut app, Action::SelectDate(date("2024-06-01")));
        assert_eq!(app.navigator.view(), CalendarView::Day);
        assert_eq!(app.navigator.pointer(), date("2024-06-01"));
        // selection untouched by granularity navigation
        assert_eq!(app.range.start, Some(date("2024-03-10")));
    }

    #[test]
    fn test_step_disabled_at_bound_is_a_no_op() {
        let config = Config {
            initial_date: Some("2024-03-01".to_string()),
            min_date: Some("2024-02-15".to_string()),
            ..Config::default()
        };
        let mut app = App::with_config(config, date("2024-03-10"));

        // February overlaps the bound: stepping back lands on Feb 1
        drive(&mut app, Action::StepBack);
        assert_eq!(app.navigator.pointer(), date("2024-02-01"));

        // January is fully outside: the arrow is disabled
        drive(&mut app, Action::StepBack);
        assert_eq!(app.navigator.pointer(), date("2024-02-01"));
    }

    #[test]
    fn test_select_cursor_picks_under_cursor() {
        let mut app = app();
        drive(&mut app, Action::CursorRight);
        drive(&mut app, Action::SelectCursor);
        assert_eq!(app.range.start, Some(date("2024-03-02")));
    }
}
