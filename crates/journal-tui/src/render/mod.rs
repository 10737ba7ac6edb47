//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use journal_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only viewport bookkeeping is written back to state: the list scroll
/// offset and the number of products that fit, which page keys use.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(&state.list), areas.header);

    let filter_bar =
        widgets::FilterBar::new(&state.list).search_focused(state.ui_mode == UiMode::SearchInput);
    frame.render_widget(filter_bar, areas.filters);

    let mut viewport = widgets::ListViewport {
        offset: state.list_offset,
        rows: state.visible_rows,
    };
    frame.render_stateful_widget(
        widgets::ProductList::new(&state.list),
        areas.list,
        &mut viewport,
    );
    state.list_offset = viewport.offset;
    state.visible_rows = viewport.rows;

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    match state.ui_mode {
        UiMode::Form => {
            if let Some(form) = &state.form {
                frame.render_widget(widgets::ProductForm::new(form), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
        UiMode::Normal | UiMode::SearchInput => {}
    }
}
