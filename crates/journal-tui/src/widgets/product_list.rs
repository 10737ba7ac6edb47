//! Product list widget
//!
//! Renders the accumulated products with the selection highlighted, an
//! optional ingredient breakdown per product, and a footer reporting the
//! incremental-load state. A page-1 failure replaces the whole list with
//! an error view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState as ViewState, Paragraph, StatefulWidget, Widget},
};

use journal_app::ListState;
use journal_core::Product;

use crate::theme::{palette, styles};

/// Viewport bookkeeping carried between frames
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListViewport {
    /// Index of the first product drawn
    pub offset: usize,
    /// Products that fit in the viewport (for page keys)
    pub rows: usize,
}

pub struct ProductList<'a> {
    list: &'a ListState,
}

impl<'a> ProductList<'a> {
    pub fn new(list: &'a ListState) -> Self {
        Self { list }
    }

    fn title(&self) -> String {
        if self.list.is_applying_filters() {
            " Products (updating) ".to_string()
        } else {
            " Products ".to_string()
        }
    }

    fn item(&self, product: &'a Product, width: usize, stale: bool) -> ListItem<'a> {
        let dim = |style: Style| if stale { styles::text_muted() } else { style };

        let mut lines = vec![Line::from(vec![
            Span::styled(product.name.as_str(), dim(styles::text_bold())),
            Span::raw("  "),
            Span::styled(product.brand.as_str(), dim(styles::text_secondary())),
            Span::raw("  "),
            Span::styled(
                product.product_type.as_str(),
                dim(Style::default().fg(palette::PRODUCT_TYPE)),
            ),
            Span::raw("  "),
            Span::styled(
                format_price(product.price),
                dim(Style::default().fg(palette::PRICE)),
            ),
        ])];

        if !product.star_ingredients.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("★ {}", product.star_ingredients),
                    dim(Style::default().fg(palette::STAR_INGREDIENT)),
                ),
            ]));
        }

        if self.list.is_expanded(product.id) && !product.ingredients_list.is_empty() {
            let wrapped = wrap_words(&product.ingredients_list, width.saturating_sub(4).max(10));
            lines.extend(wrapped.into_iter().map(|chunk| {
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(chunk, dim(styles::text_muted())),
                ])
            }));
        }

        ListItem::new(Text::from(lines))
    }

    fn footer(&self) -> Line<'static> {
        if self.list.is_loading_more() {
            Line::from(Span::styled(
                "↓ Loading more products...",
                styles::accent(),
            ))
        } else if let Some(error) = &self.list.inline_error {
            Line::from(vec![
                Span::styled(format!("✗ {}", error), styles::status_red()),
                Span::styled("  n", styles::keybinding()),
                Span::styled(" retry", styles::text_muted()),
            ])
        } else if !self.list.has_more {
            Line::from(Span::styled(
                "You've reached the end of your products",
                styles::text_muted(),
            ))
        } else {
            Line::from(Span::styled("↓ more below", styles::text_muted()))
        }
    }

    fn render_message(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let [_, body] = Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }

    fn render_error(&self, error: &str, area: Rect, buf: &mut Buffer) {
        Self::render_message(
            vec![
                Line::from(Span::styled(
                    error.to_string(),
                    styles::status_red().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", styles::text_muted()),
                    Span::styled("r", styles::keybinding()),
                    Span::styled(" to retry", styles::text_muted()),
                ]),
            ],
            area,
            buf,
        );
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        if self.list.is_loading_initial() || self.list.is_applying_filters() {
            Self::render_message(
                vec![Line::from(Span::styled(
                    "Loading products...",
                    styles::text_secondary(),
                ))],
                area,
                buf,
            );
            return;
        }

        let has_products = self.list.unfiltered_total.is_some_and(|t| t > 0);
        let lines = if has_products || self.list.has_active_filters() {
            vec![
                Line::from(Span::styled(
                    "No products match your current filters.",
                    styles::text_primary(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Try adjusting your filters, or press ", styles::text_muted()),
                    Span::styled("c", styles::keybinding()),
                    Span::styled(" to clear them", styles::text_muted()),
                ]),
            ]
        } else {
            vec![
                Line::from(Span::styled(
                    "No products found. Add your first product!",
                    styles::text_primary(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", styles::text_muted()),
                    Span::styled("a", styles::keybinding()),
                    Span::styled(" to add a product", styles::text_muted()),
                ]),
            ]
        };
        Self::render_message(lines, area, buf);
    }
}

impl StatefulWidget for ProductList<'_> {
    type State = ListViewport;

    fn render(self, area: Rect, buf: &mut Buffer, viewport: &mut ListViewport) {
        let block = styles::glass_block(true)
            .title(self.title())
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(error) = &self.list.error {
            self.render_error(error, inner, buf);
            return;
        }
        if self.list.items.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let stale = self.list.is_applying_filters();
        let width = list_area.width as usize;
        let items: Vec<ListItem> = self
            .list
            .items
            .iter()
            .map(|p| self.item(p, width, stale))
            .collect();

        let mut view_state = ViewState::default()
            .with_offset(viewport.offset)
            .with_selected(Some(self.list.selected));
        StatefulWidget::render(
            List::new(items)
                .highlight_style(styles::focused_selected())
                .highlight_symbol("▶ "),
            list_area,
            buf,
            &mut view_state,
        );

        viewport.offset = view_state.offset();
        // Most products take a name row and an ingredient row
        viewport.rows = (list_area.height as usize / 2).max(1);

        buf.set_line(footer_area.x + 1, footer_area.y, &self.footer(), footer_area.width);
    }
}

/// `₱1,250`; missing or zero prices show as `₱0`
pub fn format_price(price: Option<i64>) -> String {
    let value = price.unwrap_or(0);
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0 { "-" } else { "" };
    format!("{}₱{}", sign, grouped)
}

/// Greedy word wrap to `width` columns
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
