//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own rendering and event translation.
//! Components communicate through Actions rather than direct state mutation;
//! the picker state itself lives in the model layer and is passed down for
//! drawing.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Process Actions and update local presentation state
/// 3. `draw` - Render the component
pub trait Component {
    /// Initialize the component
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// Converts key events into semantic Actions; state changes belong in
    /// `update`.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    ///
    /// Hit-testing against the component's last drawn area happens here; the
    /// resulting Action carries the semantic meaning (which date was clicked
    /// or hovered), never raw coordinates.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// May return a follow-up Action (e.g. confirming the quit dialog
    /// re-emits the quit itself).
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// Pure rendering - no state changes beyond remembering the drawn area
    /// for later hit-testing.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
