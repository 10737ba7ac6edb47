//! Status bar widget
//!
//! One line at the bottom of the screen: the current notice if there is one,
//! otherwise the key hints for the active mode. The list position sits on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use journal_app::state::{AppState, UiMode};

use crate::theme::{palette, styles};

/// Status bar widget showing notices, hints and position
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(mode: UiMode) -> &'static [(&'static str, &'static str)] {
        match mode {
            UiMode::Normal => &[
                ("j/k", "move"),
                ("/", "search"),
                ("1-9", "tags"),
                ("a", "add"),
                ("e", "edit"),
                ("d", "delete"),
                ("i", "ingredients"),
                ("q", "quit"),
            ],
            UiMode::SearchInput => &[
                ("Enter", "apply"),
                ("Esc", "leave"),
                ("Ctrl+u", "clear"),
            ],
            UiMode::Form => &[("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")],
            UiMode::ConfirmDialog => &[("y", "confirm"), ("n", "cancel")],
        }
    }

    fn left_line(&self) -> Line<'a> {
        if let Some(notice) = &self.state.notice {
            let (icon, style) = styles::notice_style(notice.level);
            return Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} {}", icon, notice.message), style),
            ]);
        }

        let mut spans = vec![Span::raw(" ")];
        for (idx, (key, action)) in Self::hints(self.state.ui_mode).iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Line::from(spans)
    }

    /// "3/40" style position in the loaded items, with the page counter
    pub fn position_text(state: &AppState) -> String {
        let list = &state.list;
        if list.items.is_empty() {
            return String::new();
        }
        format!(
            "{}/{} · page {} ",
            list.selected + 1,
            list.items.len(),
            list.current_page
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        Paragraph::new(self.left_line()).render(area, buf);

        let position = Self::position_text(self.state);
        if !position.is_empty() {
            Paragraph::new(Span::styled(position, styles::text_secondary()))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
