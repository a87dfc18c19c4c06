//! UI Components
//!
//! Each component encapsulates its own presentation state, event handling,
//! and rendering logic. Components communicate through Actions rather than
//! direct state mutation; the picker state they render from is passed down
//! as a borrowed `PickerContext` each frame.

pub mod calendar;
pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod month_grid;
pub mod quit_dialog;
pub mod status_bar;
pub mod year_grid;

pub use calendar::{draw_calendar, CalendarComponent};
pub use header::{draw_header, HeaderComponent};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use month_grid::{draw_month_grid, MonthGridComponent};
pub use quit_dialog::QuitDialog;
pub use status_bar::draw_status_bar;
pub use year_grid::{draw_year_grid, YearGridComponent};

use crate::model::navigator::ViewNavigator;
use crate::model::selection::{DisabledSet, FocusSide, SelectionRange};
use chrono::NaiveDate;

/// Borrowed snapshot of the picker state, passed to every draw function.
pub struct PickerContext<'a> {
    pub navigator: &'a ViewNavigator,
    pub range: &'a SelectionRange,
    pub focus: FocusSide,
    pub disabled: &'a DisabledSet,
    pub today: NaiveDate,
    /// Whether the current selection passes validation (gates done)
    pub valid: bool,
    pub error: Option<&'a str>,
}
