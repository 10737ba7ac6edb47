//! List handlers: loading, selection, filters and delete

use std::time::Instant;

use journal_core::{Page, ProductId};
use tracing::{debug, warn};

use crate::confirm_dialog::ConfirmDialogState;
use crate::list_state::{PageRequest, PageTicket};
use crate::message::Message;
use crate::state::{AppState, Notice, UiMode};

use super::{UpdateAction, UpdateResult};

const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products";

/// Start the list: page 1 now, brands as a follow-up.
pub fn handle_initialize(state: &mut AppState) -> UpdateResult {
    match state.list.initialize() {
        Some(request) => UpdateResult::fetch(request).then(Message::LoadBrands),
        None => UpdateResult::message(Message::LoadBrands),
    }
}

pub fn handle_load_brands(state: &mut AppState) -> UpdateResult {
    if state.list.begin_brands_fetch() {
        UpdateResult::action(UpdateAction::FetchBrands)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_brands_loaded(state: &mut AppState, brands: Vec<String>) -> UpdateResult {
    debug!("Loaded {} brands", brands.len());
    state.list.set_brands(brands);
    UpdateResult::none()
}

pub fn handle_brands_failed(state: &mut AppState, error: String) -> UpdateResult {
    // The brand filter just stays empty
    warn!("Failed to load brands: {}", error);
    state.list.brands_failed();
    UpdateResult::none()
}

pub fn handle_scroll_near_end(state: &mut AppState) -> UpdateResult {
    state.scroll_debounce.signal(Instant::now());
    UpdateResult::none()
}

pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    state.expire_notice(chrono::Local::now());
    // Only if the selection is still near the end when the window closes
    if state.scroll_debounce.poll(Instant::now())
        && state.list.is_near_end(state.settings.behavior.prefetch_rows)
    {
        UpdateResult::message(Message::LoadNextPage)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_load_next_page(state: &mut AppState) -> UpdateResult {
    fetch_or_none(state.list.request_next_page())
}

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.scroll_debounce.cancel();
    UpdateResult::fetch(state.list.reload())
}

pub fn handle_page_loaded(state: &mut AppState, ticket: PageTicket, page: Page) -> UpdateResult {
    state.list.apply_page(ticket, page);
    UpdateResult::none()
}

pub fn handle_page_failed(state: &mut AppState, ticket: PageTicket, error: String) -> UpdateResult {
    if state.list.is_current(ticket) {
        warn!("Page {} failed: {}", ticket.page, error);
    }
    state.list.fail_page(ticket, FETCH_PRODUCTS_FAILED);
    UpdateResult::none()
}

fn fetch_or_none(request: Option<PageRequest>) -> UpdateResult {
    request.map(UpdateResult::fetch).unwrap_or_default()
}

/// Apply a filter change; pending scroll signals belong to the old list.
fn filter_changed(state: &mut AppState, request: PageRequest) -> UpdateResult {
    state.scroll_debounce.cancel();
    UpdateResult::fetch(request)
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Emit a near-end signal when the selection reaches the prefetch zone.
fn after_downward_move(state: &AppState) -> UpdateResult {
    if state.list.is_near_end(state.settings.behavior.prefetch_rows) {
        UpdateResult::message(Message::ScrollNearEnd)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.list.select_next();
    after_downward_move(state)
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.list.select_previous();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let rows = state.page_rows();
    state.list.page_down(rows);
    after_downward_move(state)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let rows = state.page_rows();
    state.list.page_up(rows);
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    state.list.select_last();
    after_downward_move(state)
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.list.select_first();
    UpdateResult::none()
}

pub fn handle_toggle_ingredients(state: &mut AppState) -> UpdateResult {
    if let Some(id) = state.list.selected_product().map(|p| p.id) {
        state.list.toggle_ingredients(id);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_enter_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::SearchInput;
    UpdateResult::none()
}

pub fn handle_search_insert(state: &mut AppState, c: char) -> UpdateResult {
    let mut text = state.list.search_input.clone();
    text.push(c);
    state.list.set_search_text(text);
    UpdateResult::none()
}

pub fn handle_search_backspace(state: &mut AppState) -> UpdateResult {
    let mut text = state.list.search_input.clone();
    text.pop();
    state.list.set_search_text(text);
    UpdateResult::none()
}

pub fn handle_commit_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let text = state.list.search_input.clone();
    let request = state.list.commit_search(&text);
    filter_changed(state, request)
}

/// Leave the search box and restore it to the applied search.
pub fn handle_cancel_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let applied = state.list.active_filter.search.clone();
    state.list.set_search_text(applied);
    UpdateResult::none()
}

pub fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let request = state.list.clear_search();
    filter_changed(state, request)
}

pub fn handle_clear_filters(state: &mut AppState) -> UpdateResult {
    let request = state.list.clear_all_filters();
    filter_changed(state, request)
}

pub fn handle_toggle_tag(state: &mut AppState, tag: &str) -> UpdateResult {
    let request = state.list.toggle_tag(tag);
    filter_changed(state, request)
}

pub fn handle_cycle_product_type(state: &mut AppState) -> UpdateResult {
    let request = state.list.cycle_product_type();
    filter_changed(state, request)
}

pub fn handle_cycle_brand(state: &mut AppState) -> UpdateResult {
    let request = state.list.cycle_brand();
    filter_changed(state, request)
}

pub fn handle_cycle_sort(state: &mut AppState) -> UpdateResult {
    let request = state.list.cycle_sort();
    filter_changed(state, request)
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    let Some(product) = state.list.selected_product() else {
        return UpdateResult::none();
    };
    let id = product.id;

    if state.settings.behavior.confirm_delete {
        let dialog = ConfirmDialogState::delete_confirmation(product);
        state.show_confirm_dialog(dialog);
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::ConfirmDelete { id })
    }
}

pub fn handle_confirm_delete(state: &mut AppState, id: ProductId) -> UpdateResult {
    state.hide_confirm_dialog();
    UpdateResult::action(UpdateAction::DeleteProduct { id })
}

/// Full page-1 refresh under the current filter rather than a local splice.
pub fn handle_product_deleted(state: &mut AppState, id: ProductId) -> UpdateResult {
    debug!("Product {} deleted", id);
    state.show_notice(Notice::success("Product deleted successfully!"));
    UpdateResult::message(Message::Reload)
}

pub fn handle_delete_failed(state: &mut AppState, id: ProductId, error: String) -> UpdateResult {
    warn!("Failed to delete product {}: {}", id, error);
    state.show_notice(Notice::error("Error deleting product"));
    UpdateResult::none()
}

pub fn handle_dialog_select_next(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.confirm_dialog.as_mut() {
        dialog.select_next();
    }
    UpdateResult::none()
}

pub fn handle_cancel_dialog(state: &mut AppState) -> UpdateResult {
    state.hide_confirm_dialog();
    UpdateResult::none()
}
