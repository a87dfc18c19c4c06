//! Day grid component
//!
//! Renders the 6x7 month grid and owns the transient hover cursor. The
//! keyboard cursor doubles as the hover cursor so a forming range previews
//! the same way for key and mouse users. All cell appearance comes from the
//! pure classifier in the model layer; this component only maps states to
//! styles and terminal cells back to dates.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::GridMetrics;
use crate::components::PickerContext;
use crate::model::date::{self, GRID_DAYS, GRID_WEEKS, WEEKDAY_SHORT};
use crate::model::selection::{classify_day, day_variant, DayCellState, DayVariant};
use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one day cell in terminal columns
const CELL_WIDTH: u16 = 5;

/// Day grid: keyboard cursor, hover state, and mouse hit-testing
pub struct CalendarComponent {
    /// Keyboard position inside the grid
    cursor: NaiveDate,
    /// Transient hover cursor; cleared on leave and on every commit
    hover: Option<NaiveDate>,
    /// Grid geometry of the last draw, for hit-testing
    metrics: Option<GridMetrics>,
    /// Date rendered in the grid's top-left cell at the last draw
    first_cell: Option<NaiveDate>,
}

impl CalendarComponent {
    pub fn new(cursor: NaiveDate) -> Self {
        Self {
            cursor,
            hover: None,
            metrics: None,
            first_cell: None,
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn hover(&self) -> Option<NaiveDate> {
        self.hover
    }

    /// Jump the cursor (paging, go-to-today) without starting a preview.
    pub fn set_cursor(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    /// Move the cursor by whole days; hover follows.
    pub fn move_cursor(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(moved) = moved {
            self.cursor = moved;
            self.hover = Some(moved);
        }
    }

    pub fn set_hover(&mut self, date: NaiveDate) {
        self.hover = Some(date);
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// The date under a terminal coordinate, if it hits the grid.
    fn date_at(&self, x: u16, y: u16) -> Option<NaiveDate> {
        let metrics = self.metrics?;
        let first = self.first_cell?;
        let (row, col) = metrics.hit(x, y)?;
        first.checked_add_days(Days::new((row as u64) * GRID_DAYS as u64 + col as u64))
    }
}

impl Component for CalendarComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::Char('[') | KeyCode::PageUp => Some(Action::StepBack),
            KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
            KeyCode::Tab => Some(Action::SwitchFocus),
            KeyCode::Char('m') => Some(Action::ToggleMonthView),
            KeyCode::Char('y') => Some(Action::ToggleYearView),
            KeyCode::Char('t') => Some(Action::JumpToday),
            KeyCode::Char('d') => Some(Action::Confirm),
            KeyCode::Char('c') => Some(Action::Cancel),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Moved => match self.date_at(mouse.column, mouse.row) {
                Some(date) => Some(Action::HoverDate(date)),
                None => Some(Action::ClearHover),
            },
            MouseEventKind::Down(MouseButton::Left) => {
                self.date_at(mouse.column, mouse.row).map(Action::SelectDate)
            }
            MouseEventKind::ScrollUp => Some(Action::StepBack),
            MouseEventKind::ScrollDown => Some(Action::StepForward),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_calendar which takes full context
        Ok(())
    }
}

/// Style for one cell: selection state first, presentation variant on top.
fn cell_style(state: DayCellState, variant: DayVariant, is_cursor: bool) -> Style {
    let mut style = match state {
        DayCellState::Disabled => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        DayCellState::RangeStart | DayCellState::RangeEnd => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        DayCellState::InRange => Style::default().fg(Color::Black).bg(Color::LightBlue),
        DayCellState::HoverPreviewInRange => Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        DayCellState::HoverPreviewBoundary => Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        DayCellState::Unselected => match variant {
            DayVariant::OtherMonth => Style::default().fg(Color::DarkGray),
            DayVariant::Today => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            DayVariant::Default => Style::default().fg(Color::White),
        },
    };
    if state != DayCellState::Unselected && variant == DayVariant::Today {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Draw the day grid into `area` and record its geometry for hit-testing.
pub fn draw_calendar(
    frame: &mut Frame,
    area: Rect,
    calendar: &mut CalendarComponent,
    ctx: &PickerContext,
) -> Result<()> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid_width = CELL_WIDTH * GRID_DAYS as u16;
    // weekday header line + six week rows
    let grid_height = 1 + GRID_WEEKS as u16;
    if inner.width < grid_width || inner.height < grid_height {
        calendar.metrics = None;
        calendar.first_cell = None;
        let msg = Paragraph::new("terminal too small")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return Ok(());
    }

    let origin_x = inner.x + (inner.width - grid_width) / 2;
    let origin_y = inner.y + (inner.height - grid_height) / 2;

    let header_spans: Vec<Span> = WEEKDAY_SHORT
        .iter()
        .map(|wd| {
            Span::styled(
                format!("{:^width$}", wd, width = CELL_WIDTH as usize),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(header_spans)),
        Rect::new(origin_x, origin_y, grid_width, 1),
    );

    let pointer = ctx.navigator.pointer();
    let grid = date::month_grid(pointer);
    let day_area = Rect::new(origin_x, origin_y + 1, grid_width, GRID_WEEKS as u16);
    let metrics = GridMetrics::new(day_area, GRID_WEEKS as u16, GRID_DAYS as u16);

    for (row, week) in grid.iter().enumerate() {
        let spans: Vec<Span> = week
            .iter()
            .map(|&day| {
                let state = classify_day(day, ctx.range, calendar.hover, ctx.focus, ctx.disabled);
                let variant = day_variant(day, pointer, ctx.today);
                let style = cell_style(state, variant, day == calendar.cursor);
                Span::styled(
                    format!("{:^width$}", day.day(), width = CELL_WIDTH as usize),
                    style,
                )
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(origin_x, origin_y + 1 + row as u16, grid_width, 1),
        );
    }

    calendar.metrics = Some(metrics);
    calendar.first_cell = Some(grid[0][0]);
    Ok(())
}
