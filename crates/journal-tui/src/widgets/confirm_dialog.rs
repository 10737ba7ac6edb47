//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use journal_app::confirm_dialog::ConfirmDialogState;

use super::modal;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 54;
const DIALOG_HEIGHT: u16 = 9;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (idx, (label, _)) in self.state.options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if idx == self.state.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal::open(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT, &self.state.title);

        let [_, message_area, _, buttons_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::status_yellow())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons_area, buf);

        let hints = Line::from(vec![
            Span::styled("y", styles::keybinding()),
            Span::styled(" confirm  ", styles::text_muted()),
            Span::styled("n/Esc", styles::keybinding()),
            Span::styled(" cancel  ", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" switch", styles::text_muted()),
        ]);
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(hints_area, buf);
    }
}
