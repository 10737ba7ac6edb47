//! Add/Edit product form modal

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use journal_app::product_form::{FormField, FormStatus, ProductFormState};

use super::modal;
use crate::theme::styles;

const FORM_WIDTH: u16 = 64;
/// Six fields, a blank line, the status line and the key hints, in borders
const FORM_HEIGHT: u16 = 11;
const LABEL_WIDTH: usize = 18;

pub struct ProductForm<'a> {
    form: &'a ProductFormState,
}

impl<'a> ProductForm<'a> {
    pub fn new(form: &'a ProductFormState) -> Self {
        Self { form }
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let focused = self.form.focused == field && self.form.is_editable();
        let value = self.form.value(field);

        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let mut spans = vec![
            Span::styled(if focused { "▶ " } else { "  " }, styles::accent()),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
        ];

        if field == FormField::ProductType {
            let shown = if value.is_empty() { "Select type" } else { value };
            let style = if value.is_empty() {
                styles::text_muted()
            } else {
                styles::text_primary()
            };
            spans.push(Span::styled(format!("◀ {} ▶", shown), style));
        } else {
            spans.push(Span::styled(value, styles::text_primary()));
            if focused {
                spans.push(Span::styled("_", styles::status_yellow()));
            }
        }
        Line::from(spans)
    }

    fn status_line(&self) -> Line<'a> {
        match (&self.form.error, self.form.status) {
            (_, FormStatus::Loading) => {
                Line::from(Span::styled("  Loading product...", styles::text_secondary()))
            }
            (_, FormStatus::Submitting) => {
                Line::from(Span::styled("  Saving...", styles::accent()))
            }
            (Some(error), FormStatus::Idle) => {
                Line::from(Span::styled(format!("  ✗ {}", error), styles::status_red()))
            }
            (None, FormStatus::Idle) => Line::from(""),
        }
    }

    fn hints_line() -> Line<'static> {
        Line::from(vec![
            Span::styled("  Tab", styles::keybinding()),
            Span::styled(" next  ", styles::text_muted()),
            Span::styled("←/→", styles::keybinding()),
            Span::styled(" type  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" save  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ])
    }
}

impl Widget for ProductForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal::open(buf, area, FORM_WIDTH, FORM_HEIGHT, self.form.title());

        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|field| self.field_line(*field))
            .collect();
        lines.push(Line::from(""));
        lines.push(self.status_line());
        lines.push(Self::hints_line());

        for (row, line) in lines.iter().enumerate() {
            let row = row as u16;
            if row >= inner.height {
                break;
            }
            buf.set_line(inner.x, inner.y + row, line, inner.width);
        }
    }
}
