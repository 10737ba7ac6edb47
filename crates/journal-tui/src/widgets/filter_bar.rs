//! Filter bar widget
//!
//! Three rows inside a glass container:
//! - search box (focused while typing)
//! - product type, brand and sort selectors
//! - tag toggles, numbered for their hotkeys

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use journal_app::ListState;
use journal_core::{product_type_label, tag_label, AVAILABLE_TAGS};

use crate::theme::{palette, styles};

pub struct FilterBar<'a> {
    list: &'a ListState,
    search_focused: bool,
}

impl<'a> FilterBar<'a> {
    pub fn new(list: &'a ListState) -> Self {
        Self {
            list,
            search_focused: false,
        }
    }

    /// Show the search cursor and an active border
    pub fn search_focused(mut self, focused: bool) -> Self {
        self.search_focused = focused;
        self
    }

    fn search_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(" / ", styles::keybinding()),
            Span::styled("Search: ", styles::text_muted()),
        ];
        if self.list.search_input.is_empty() && !self.search_focused {
            spans.push(Span::styled(
                "name, brand or ingredient",
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(
                self.list.search_input.as_str(),
                styles::text_primary(),
            ));
        }
        if self.search_focused {
            spans.push(Span::styled("_", styles::status_yellow()));
        }
        Line::from(spans)
    }

    fn selectors_line(&self) -> Line<'a> {
        let filter = &self.list.active_filter;
        let brand = filter.brand.as_deref().unwrap_or("All Brands");

        let mut spans = Vec::new();
        for (key, label, value) in [
            ("t", "Type", product_type_label(filter.product_type)),
            ("b", "Brand", brand),
            ("s", "Sort", filter.sort.label()),
        ] {
            spans.push(Span::styled(format!(" {} ", key), styles::keybinding()));
            spans.push(Span::styled(format!("{}: ", label), styles::text_muted()));
            spans.push(Span::styled(value.to_string(), styles::accent()));
            spans.push(Span::raw("  "));
        }

        if self.list.has_active_filters() {
            spans.push(Span::styled("c", styles::keybinding()));
            spans.push(Span::styled(" clear filters", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn tags_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(" Tags: ", styles::text_muted())];
        for (idx, tag) in AVAILABLE_TAGS.iter().enumerate() {
            let active = self.list.active_filter.has_tag(tag);
            let (mark, style) = if active {
                ("[x]", styles::accent_bold())
            } else {
                ("[ ]", styles::text_secondary())
            };
            spans.push(Span::styled(format!("{} ", idx + 1), styles::keybinding()));
            spans.push(Span::styled(format!("{} {}", mark, tag_label(tag)), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.search_focused)
            .title(" Filters ")
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = [self.search_line(), self.selectors_line(), self.tags_line()];
        for (row, line) in lines.iter().enumerate() {
            let row = row as u16;
            if row >= inner.height {
                break;
            }
            buf.set_line(inner.x, inner.y + row, line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use journal_core::SortKey;

    #[test]
    fn test_filter_bar_shows_defaults() {
        let mut term = TestTerminal::with_size(100, 5);
        let list = ListState::new(20);
        term.render_widget(FilterBar::new(&list), term.area());

        assert!(term.buffer_contains("All Types"));
        assert!(term.buffer_contains("All Brands"));
        assert!(term.buffer_contains("Name A-Z"));
        assert!(!term.buffer_contains("clear filters"));
    }

    #[test]
    fn test_filter_bar_marks_active_tag() {
        let mut term = TestTerminal::with_size(100, 5);
        let mut list = ListState::new(20);
        list.toggle_tag("oil-free");
        term.render_widget(FilterBar::new(&list), term.area());

        assert!(term.buffer_contains("[x] Oil Free"));
        assert!(term.buffer_contains("[ ] Alcohol Free"));
        assert!(term.buffer_contains("clear filters"));
    }

    #[test]
    fn test_filter_bar_shows_sort_label() {
        let mut term = TestTerminal::with_size(100, 5);
        let mut list = ListState::new(20);
        list.set_sort(SortKey::PriceDesc);
        term.render_widget(FilterBar::new(&list), term.area());

        assert!(term.buffer_contains("Price High-Low"));
    }

    #[test]
    fn test_search_cursor_only_when_focused() {
        let mut list = ListState::new(20);
        list.set_search_text("cica");

        let mut term = TestTerminal::with_size(100, 5);
        term.render_widget(FilterBar::new(&list).search_focused(true), term.area());
        assert!(term.buffer_contains("cica_"));

        let mut term = TestTerminal::with_size(100, 5);
        term.render_widget(FilterBar::new(&list), term.area());
        assert!(term.buffer_contains("cica"));
        assert!(!term.buffer_contains("cica_"));
    }
}
