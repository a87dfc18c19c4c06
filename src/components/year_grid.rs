//! Year overlay component
//!
//! 12-cell decade grid: the decade's ten years plus one year of the
//! neighbouring decade on each edge. Picking a cell commits the year as the
//! visible year; the edge cells double as a one-step decade shortcut, as in
//! the source design.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::GridMetrics;
use crate::components::PickerContext;
use crate::model::date::{self, DECADE_CELLS};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COLS: u16 = 3;
const ROWS: u16 = 4;
const CELL_WIDTH: u16 = 8;

/// Year picker overlay
pub struct YearGridComponent {
    /// Highlighted cell, 0..12 over the decade grid
    cursor: usize,
    metrics: Option<GridMetrics>,
    /// Pointer snapshot from the last draw
    pointer: Option<NaiveDate>,
}

impl Default for YearGridComponent {
    fn default() -> Self {
        Self {
            cursor: 0,
            metrics: None,
            pointer: None,
        }
    }
}

impl YearGridComponent {
    /// Re-seed the highlighted cell from the visible pointer when the
    /// overlay opens.
    pub fn reset(&mut self, pointer: NaiveDate) {
        let years = date::decade_grid(pointer);
        self.cursor = years
            .iter()
            .position(|&y| y == pointer.year())
            .unwrap_or(1);
        self.pointer = Some(pointer);
    }

    fn move_cursor(&mut self, delta: i32) {
        let moved = self.cursor as i32 + delta;
        if (0..DECADE_CELLS as i32).contains(&moved) {
            self.cursor = moved as usize;
        }
    }

    /// The date a cell pick would commit: the pointer shifted into the
    /// cell's year, Feb 29 clamped on non-leap targets.
    fn target(&self, index: usize) -> Option<NaiveDate> {
        let pointer = self.pointer?;
        let year = date::decade_grid(pointer)[index];
        Some(date::step_years(pointer, year - pointer.year()))
    }

    fn target_at(&self, x: u16, y: u16) -> Option<NaiveDate> {
        let (row, col) = self.metrics?.hit(x, y)?;
        self.target((row * COLS + col) as usize)
    }
}

impl Component for YearGridComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-(COLS as i32));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(COLS as i32);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.target(self.cursor).map(Action::SelectDate)
            }
            KeyCode::Char('[') | KeyCode::PageUp => Some(Action::StepBack),
            KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
            KeyCode::Char('m') => Some(Action::ToggleMonthView),
            KeyCode::Char('y') => Some(Action::ToggleYearView),
            KeyCode::Char('d') => Some(Action::Confirm),
            KeyCode::Char('c') | KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.target_at(mouse.column, mouse.row).map(Action::SelectDate)
            }
            MouseEventKind::ScrollUp => Some(Action::StepBack),
            MouseEventKind::ScrollDown => Some(Action::StepForward),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_year_grid which takes full context
        Ok(())
    }
}

/// Draw the year overlay and record its geometry.
pub fn draw_year_grid(
    frame: &mut Frame,
    area: Rect,
    year_grid: &mut YearGridComponent,
    ctx: &PickerContext,
) -> Result<()> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_height = if inner.height >= ROWS * 2 { 2 } else { 1 };
    let grid_width = CELL_WIDTH * COLS;
    let grid_height = ROWS * row_height;
    if inner.width < grid_width || inner.height < grid_height {
        year_grid.metrics = None;
        return Ok(());
    }

    let pointer = ctx.navigator.pointer();
    year_grid.pointer = Some(pointer);
    let years = date::decade_grid(pointer);

    let grid_area = Rect::new(
        inner.x + (inner.width - grid_width) / 2,
        inner.y + (inner.height - grid_height) / 2,
        grid_width,
        grid_height,
    );
    let metrics = GridMetrics::new(grid_area, ROWS, COLS);

    let pending = ctx.navigator.pending();
    for row in 0..ROWS {
        for col in 0..COLS {
            let index = (row * COLS + col) as usize;
            let year = years[index];
            let cell = metrics.cell(row, col);

            let other_decade = index == 0 || index == DECADE_CELLS - 1;
            let disabled = !ctx.disabled.bounds.overlaps_year(year);
            let selected = pending.year() == year;
            let current = ctx.today.year() == year;

            let mut style = if disabled {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            } else if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if other_decade {
                Style::default().fg(Color::DarkGray)
            } else if current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if index == year_grid.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let label = format!("{:^width$}", year, width = CELL_WIDTH as usize);
            let label_y = cell.y + cell.height / 2;
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(label, style))),
                Rect::new(cell.x, label_y, cell.width, 1),
            );
        }
    }

    year_grid.metrics = Some(metrics);
    Ok(())
}
