//! Modal frame shared by the product form and the confirmation dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell of `area` so the modal stands out.
fn dim(buf: &mut Buffer, area: Rect) {
    let style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}

/// One-cell shadow below and to the right of `modal`.
fn shadow(buf: &mut Buffer, modal: Rect) {
    let style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right = modal.right();
    let bottom = modal.bottom();
    let cells = (modal.y + 1..=bottom)
        .map(|y| (right, y))
        .chain((modal.x + 1..right).map(|x| (x, bottom)));
    for pos in cells {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(style);
        }
    }
}

/// Draw an empty titled modal of the given size over `area` and return the
/// inner rect for its content.
pub fn open(buf: &mut Buffer, area: Rect, width: u16, height: u16, title: &str) -> Rect {
    dim(buf, area);
    let modal = centered_rect(width, height, area);
    shadow(buf, modal);
    Clear.render(modal, buf);

    let title = format!(" {} ", title);
    let block = styles::modal_block(&title);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}
