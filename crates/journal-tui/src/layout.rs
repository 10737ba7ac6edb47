//! Screen layout definitions for the TUI
//!
//! Header on top, filter bar below it, the product list filling the middle
//! and a one-line status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Filter bar: search row + filters row + tags row, inside borders
const FILTER_BAR_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, totals and load indicator
    pub header: Rect,

    /// Search box, type/brand/sort selectors and tag toggles
    pub filters: Rect,

    /// Product list (glass container)
    pub list: Rect,

    /// Notices and key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FILTER_BAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        filters: chunks[1],
        list: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.filters.height, 5);
        assert_eq!(layout.filters.y, 3);
        assert_eq!(layout.list.y, 8);
        assert_eq!(layout.list.height, 15); // 24 - 3 - 5 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.filters.height + layout.list.height + layout.status.height,
            area.height
        );
    }
}
