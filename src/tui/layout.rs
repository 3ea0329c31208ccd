use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the main view
pub struct AppLayout {
    pub projects_area: Rect,
    pub terminal_area: Rect,
    pub timeline_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the split layout:
    /// - Project strip: 3 rows (top)
    /// - Terminal: 60% width (left)
    /// - Git-flow timeline: 40% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Project strip
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Terminal
                Constraint::Percentage(40), // Timeline
            ])
            .split(vertical_chunks[1]);

        Self {
            projects_area: vertical_chunks[0],
            terminal_area: horizontal_chunks[0],
            timeline_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }

    /// Centered overlay rectangle for the command palette.
    pub fn palette_area(area: Rect) -> Rect {
        let width = (area.width * 6 / 10).clamp(20, 70).min(area.width);
        let height = (area.height / 2).clamp(5, 16).min(area.height);
        Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.projects_area.height, 3);
        assert_eq!(layout.projects_area.y, 0);

        // Status bar is 1 row at the bottom
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // Main area gets the rest
        assert_eq!(layout.terminal_area.height, 26);
        assert_eq!(layout.timeline_area.height, 26);
        assert_eq!(layout.terminal_area.width, 60);
        assert_eq!(layout.timeline_area.width, 40);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 7);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.terminal_area.height, 3);
    }

    #[test]
    fn test_palette_area_is_centered_and_bounded() {
        let area = Rect::new(0, 0, 100, 30);
        let palette = AppLayout::palette_area(area);

        assert_eq!(palette.width, 60);
        assert_eq!(palette.x, 20);
        assert!(palette.height <= 16);
        assert!(palette.bottom() <= area.bottom());
    }

    #[test]
    fn test_palette_area_tiny_screen() {
        let area = Rect::new(0, 0, 24, 6);
        let palette = AppLayout::palette_area(area);
        assert!(palette.width <= area.width);
        assert!(palette.height <= area.height);
    }
}
