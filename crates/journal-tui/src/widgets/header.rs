//! Header bar widget
//!
//! Title on the left; product totals and the load indicator on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use journal_app::ListState;

use crate::theme::{palette, styles};

/// Main header showing app title, totals and load state
pub struct MainHeader<'a> {
    list: &'a ListState,
}

impl<'a> MainHeader<'a> {
    pub fn new(list: &'a ListState) -> Self {
        Self { list }
    }

    /// "N of T products", falling back to "N products" before the
    /// unfiltered total is known
    pub fn totals_text(list: &ListState) -> String {
        let shown = list.items.len();
        match list.unfiltered_total {
            Some(total) => format!("{} of {} products", shown, total),
            None => format!("{} products", shown),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = if self.list.error.is_some() {
            ("●", styles::status_red())
        } else {
            ("●", styles::status_green())
        };

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(
                "Skincare Journal",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled("My Products", styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let mut right_spans = Vec::new();
        if let Some((icon, label, style)) = styles::load_indicator(self.list.phase) {
            right_spans.push(Span::styled(format!("{} {}", icon, label), style));
            right_spans.push(Span::styled("  │  ", styles::text_muted()));
        }
        right_spans.push(Span::styled(
            Self::totals_text(self.list),
            styles::text_secondary(),
        ));
        right_spans.push(Span::raw(" "));
        let right_line = Line::from(right_spans);
        let right_width = right_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right_line, right_width);
        }
    }
}
