//! Calendar header component
//!
//! Month/year toggle buttons plus the paging arrows. The month button is
//! only shown on the day grid; while an overlay is open the year button
//! carries the overlay's label (year, or decade span). Arrow styling
//! reflects the navigator's disabled-step policy.

use crate::action::Action;
use crate::component::Component;
use crate::components::PickerContext;
use crate::model::navigator::CalendarView;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Header bar: toggle buttons and paging arrows with click zones
#[derive(Default)]
pub struct HeaderComponent {
    month_zone: Option<Rect>,
    year_zone: Option<Rect>,
    back_zone: Option<Rect>,
    forward_zone: Option<Rect>,
}

fn zone_contains(zone: Option<Rect>, x: u16, y: u16) -> bool {
    zone.is_some_and(|rect| {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    })
}

impl Component for HeaderComponent {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = (mouse.column, mouse.row);
                if zone_contains(self.month_zone, x, y) {
                    Some(Action::ToggleMonthView)
                } else if zone_contains(self.year_zone, x, y) {
                    Some(Action::ToggleYearView)
                } else if zone_contains(self.back_zone, x, y) {
                    Some(Action::StepBack)
                } else if zone_contains(self.forward_zone, x, y) {
                    Some(Action::StepForward)
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp => Some(Action::StepBack),
            MouseEventKind::ScrollDown => Some(Action::StepForward),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_header which takes full context
        Ok(())
    }
}

/// Draw the header bar and record the click zones.
pub fn draw_header(
    frame: &mut Frame,
    area: Rect,
    header: &mut HeaderComponent,
    ctx: &PickerContext,
) -> Result<()> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    header.month_zone = None;
    header.year_zone = None;
    header.back_zone = None;
    header.forward_zone = None;
    if inner.height == 0 {
        return Ok(());
    }

    let button_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans: Vec<Span> = Vec::new();
    let mut x = inner.x;

    // month button only on the day grid, as in the source design
    if ctx.navigator.view() == CalendarView::Day {
        let label = format!(" {} ▾ ", ctx.navigator.month_label());
        let width = label.width() as u16;
        header.month_zone = Some(Rect::new(x, inner.y, width, 1));
        spans.push(Span::styled(label, button_style));
        x += width;
    }

    let label = format!(" {} ▾ ", ctx.navigator.year_label());
    let width = label.width() as u16;
    header.year_zone = Some(Rect::new(x, inner.y, width, 1));
    spans.push(Span::styled(label, button_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // arrows, right-aligned
    let arrow_style = |disabled: bool| {
        if disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        }
    };
    let back_disabled = ctx.navigator.step_back_disabled(&ctx.disabled.bounds);
    let forward_disabled = ctx.navigator.step_forward_disabled(&ctx.disabled.bounds);

    if inner.width >= 8 {
        let forward_x = inner.x + inner.width - 4;
        let back_x = forward_x - 4;
        header.back_zone = Some(Rect::new(back_x, inner.y, 4, 1));
        header.forward_zone = Some(Rect::new(forward_x, inner.y, 4, 1));

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ◂  ", arrow_style(back_disabled)),
                Span::styled(" ▸  ", arrow_style(forward_disabled)),
            ])),
            Rect::new(back_x, inner.y, 8, 1),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse_down(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_zones_map_to_actions() {
        let mut header = HeaderComponent {
            month_zone: Some(Rect::new(1, 1, 8, 1)),
            year_zone: Some(Rect::new(9, 1, 7, 1)),
            back_zone: Some(Rect::new(30, 1, 4, 1)),
            forward_zone: Some(Rect::new(34, 1, 4, 1)),
        };

        assert_eq!(
            header.handle_mouse_event(mouse_down(2, 1)).unwrap(),
            Some(Action::ToggleMonthView)
        );
        assert_eq!(
            header.handle_mouse_event(mouse_down(10, 1)).unwrap(),
            Some(Action::ToggleYearView)
        );
        assert_eq!(
            header.handle_mouse_event(mouse_down(31, 1)).unwrap(),
            Some(Action::StepBack)
        );
        assert_eq!(
            header.handle_mouse_event(mouse_down(35, 1)).unwrap(),
            Some(Action::StepForward)
        );
        // outside every zone
        assert_eq!(header.handle_mouse_event(mouse_down(20, 5)).unwrap(), None);
    }
}
