//! Model layer - the pure picker core
//!
//! Everything in here is synchronous, deterministic logic with no I/O:
//! - `date` - civil-date parsing, stepping, grid generation
//! - `selection` - range state and the day-cell classifier
//! - `navigator` - day/month/year view state machine
//! - `validate` - boundary-string validation predicates
//! - `modal` - overlay stack for help/quit dialogs

pub mod date;
pub mod modal;
pub mod navigator;
pub mod selection;
pub mod validate;

// Re-export commonly used types
pub use date::DateBounds;
pub use navigator::{CalendarView, Dismiss, ViewNavigator};
pub use selection::{
    classify_day, day_variant, DayCellState, DayVariant, DisabledSet, FocusSide, SelectionRange,
};
