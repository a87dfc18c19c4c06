//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Calculate main screen layout: header bar, calendar body, status lines
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Uniform cell grid inside an area, shared by the day/month/year grids for
/// both rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    area: Rect,
    rows: u16,
    cols: u16,
    cell_width: u16,
    cell_height: u16,
}

impl GridMetrics {
    pub fn new(area: Rect, rows: u16, cols: u16) -> Self {
        Self {
            area,
            rows,
            cols,
            cell_width: (area.width / cols.max(1)).max(1),
            cell_height: (area.height / rows.max(1)).max(1),
        }
    }

    /// The rectangle of one cell.
    pub fn cell(&self, row: u16, col: u16) -> Rect {
        Rect::new(
            self.area.x + col * self.cell_width,
            self.area.y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Which cell a terminal coordinate lands in, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if x < self.area.x || y < self.area.y {
            return None;
        }
        let col = (x - self.area.x) / self.cell_width;
        let row = (y - self.area.y) / self.cell_height;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_offsets_from_area() {
        let area = Rect::new(10, 5, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(40, 20, 40, 10));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_grid_cell_positions() {
        let grid = GridMetrics::new(Rect::new(2, 1, 28, 12), 6, 7);
        assert_eq!(grid.cell(0, 0), Rect::new(2, 1, 4, 2));
        assert_eq!(grid.cell(1, 2), Rect::new(10, 3, 4, 2));
        assert_eq!(grid.cell(5, 6), Rect::new(26, 11, 4, 2));
    }

    #[test]
    fn test_grid_hit_testing() {
        let grid = GridMetrics::new(Rect::new(2, 1, 28, 12), 6, 7);
        assert_eq!(grid.hit(2, 1), Some((0, 0)));
        assert_eq!(grid.hit(5, 2), Some((0, 0)));
        assert_eq!(grid.hit(6, 1), Some((0, 1)));
        assert_eq!(grid.hit(27, 12), Some((5, 6)));
        // off the left edge and past the last column
        assert_eq!(grid.hit(1, 1), None);
        assert_eq!(grid.hit(30, 1), None);
        assert_eq!(grid.hit(2, 13), None);
    }

    #[test]
    fn test_main_layout_partitions_area() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 2);
        assert_eq!(layout.body.height, 24 - 3 - 2);
    }
}
