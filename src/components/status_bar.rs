//! Status lines under the calendar
//!
//! First line: the selection so far, which side the next pick commits, and
//! the validity verdict that gates the done action. Second line: key hints.

use crate::components::PickerContext;
use crate::model::date::format_iso;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the two status lines.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, ctx: &PickerContext) {
    let endpoint = |value: Option<chrono::NaiveDate>| match value {
        Some(date) => Span::styled(format_iso(date), Style::default().fg(Color::Cyan)),
        None => Span::styled("—", Style::default().fg(Color::DarkGray)),
    };

    let mut spans = vec![
        Span::styled(" start ", Style::default().fg(Color::White)),
        endpoint(ctx.range.start),
        Span::styled("  end ", Style::default().fg(Color::White)),
        endpoint(ctx.range.end),
        Span::styled(
            format!("  picking {}", ctx.focus.name()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        ));
    } else if ctx.range.is_complete() {
        let (label, color) = if ctx.valid {
            ("  ready — press d", Color::Green)
        } else {
            ("  selection not allowed", Color::Red)
        };
        spans.push(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Line::from(spans);
    let hints = Line::from(Span::styled(
        " ↵ pick · Tab side · [/] page · m month · y year · t today · d done · c reset · ? help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(vec![status, hints]), area);
}
