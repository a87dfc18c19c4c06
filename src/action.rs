//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use chrono::NaiveDate;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no event is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit, asking for confirmation when a selection is in progress
    Quit,
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor Movement (day grid)
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the day cursor one day back
    CursorLeft,
    /// Move the day cursor one day forward
    CursorRight,
    /// Move the day cursor one week back
    CursorUp,
    /// Move the day cursor one week forward
    CursorDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Paging
    // ─────────────────────────────────────────────────────────────────────────
    /// Page backward: a month, year, or decade depending on the view
    StepBack,
    /// Page forward: a month, year, or decade depending on the view
    StepForward,

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the cell under the keyboard cursor
    SelectCursor,
    /// Select a specific date (mouse click on a cell)
    SelectDate(NaiveDate),
    /// Hover over a date (mouse motion or keyboard cursor)
    HoverDate(NaiveDate),
    /// Clear the hover cursor (pointer left the grid)
    ClearHover,
    /// Switch which end of the range the next pick commits
    SwitchFocus,
    /// Jump the visible month to today
    JumpToday,

    // ─────────────────────────────────────────────────────────────────────────
    // View Toggles
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the month granularity overlay
    ToggleMonthView,
    /// Toggle the year granularity overlay
    ToggleYearView,
    /// Confirm: commit the overlay pick, or finish the selection
    Confirm,
    /// Cancel: close the overlay, or reset and abandon the selection
    Cancel,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the keyboard shortcut overlay
    OpenHelp,
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::CursorLeft => write!(f, "CursorLeft"),
            Action::CursorRight => write!(f, "CursorRight"),
            Action::CursorUp => write!(f, "CursorUp"),
            Action::CursorDown => write!(f, "CursorDown"),
            Action::StepBack => write!(f, "StepBack"),
            Action::StepForward => write!(f, "StepForward"),
            Action::SelectCursor => write!(f, "SelectCursor"),
            Action::SelectDate(date) => write!(f, "SelectDate({})", date),
            Action::HoverDate(date) => write!(f, "HoverDate({})", date),
            Action::ClearHover => write!(f, "ClearHover"),
            Action::SwitchFocus => write!(f, "SwitchFocus"),
            Action::JumpToday => write!(f, "JumpToday"),
            Action::ToggleMonthView => write!(f, "ToggleMonthView"),
            Action::ToggleYearView => write!(f, "ToggleYearView"),
            Action::Confirm => write!(f, "Confirm"),
            Action::Cancel => write!(f, "Cancel"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
