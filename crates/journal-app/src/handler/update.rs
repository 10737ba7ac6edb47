//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `list`: loading, selection, filters, delete
//! - `form`: add/edit form

use crate::message::Message;
use crate::state::AppPhase;
use crate::state::AppState;

use super::{form, keys::handle_key, list, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => list::handle_tick(state),

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Loading
        // ─────────────────────────────────────────────────────────
        Message::Initialize => list::handle_initialize(state),
        Message::LoadBrands => list::handle_load_brands(state),
        Message::ScrollNearEnd => list::handle_scroll_near_end(state),
        Message::LoadNextPage => list::handle_load_next_page(state),
        Message::Reload => list::handle_reload(state),
        Message::PageLoaded { ticket, page } => list::handle_page_loaded(state, ticket, page),
        Message::PageLoadFailed { ticket, error } => {
            list::handle_page_failed(state, ticket, error)
        }
        Message::BrandsLoaded(brands) => list::handle_brands_loaded(state, brands),
        Message::BrandsLoadFailed(error) => list::handle_brands_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => list::handle_select_next(state),
        Message::SelectPrevious => list::handle_select_previous(state),
        Message::SelectPageDown => list::handle_page_down(state),
        Message::SelectPageUp => list::handle_page_up(state),
        Message::SelectLast => list::handle_select_last(state),
        Message::ScrollToTop => list::handle_scroll_to_top(state),
        Message::ToggleIngredients => list::handle_toggle_ingredients(state),

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        Message::EnterSearch => list::handle_enter_search(state),
        Message::SearchInsert(c) => list::handle_search_insert(state, c),
        Message::SearchBackspace => list::handle_search_backspace(state),
        Message::CommitSearch => list::handle_commit_search(state),
        Message::CancelSearch => list::handle_cancel_search(state),
        Message::ClearSearch => list::handle_clear_search(state),
        Message::ClearFilters => list::handle_clear_filters(state),
        Message::ToggleTag(tag) => list::handle_toggle_tag(state, &tag),
        Message::CycleProductType => list::handle_cycle_product_type(state),
        Message::CycleBrand => list::handle_cycle_brand(state),
        Message::CycleSort => list::handle_cycle_sort(state),

        // ─────────────────────────────────────────────────────────
        // Delete + Confirm Dialog
        // ─────────────────────────────────────────────────────────
        Message::RequestDelete => list::handle_request_delete(state),
        Message::ConfirmDelete { id } => list::handle_confirm_delete(state, id),
        Message::ProductDeleted { id } => list::handle_product_deleted(state, id),
        Message::DeleteFailed { id, error } => list::handle_delete_failed(state, id, error),
        Message::DialogSelectNext => list::handle_dialog_select_next(state),
        Message::CancelDialog => list::handle_cancel_dialog(state),

        // ─────────────────────────────────────────────────────────
        // Add / Edit Form
        // ─────────────────────────────────────────────────────────
        Message::OpenAddForm => form::handle_open_add_form(state),
        Message::OpenEditForm => form::handle_open_edit_form(state),
        Message::ProductFetched(product) => form::handle_product_fetched(state, product),
        Message::ProductFetchFailed { id, error } => {
            form::handle_product_fetch_failed(state, id, error)
        }
        Message::FormInsert(c) => form::handle_form_insert(state, c),
        Message::FormBackspace => form::handle_form_backspace(state),
        Message::FormNextField => form::handle_form_next_field(state),
        Message::FormPrevField => form::handle_form_prev_field(state),
        Message::FormCycleType { forward } => form::handle_form_cycle_type(state, forward),
        Message::SubmitForm => form::handle_submit_form(state),
        Message::ProductSaved { product, created } => {
            form::handle_product_saved(state, product, created)
        }
        Message::ProductSaveFailed { created, error } => {
            form::handle_product_save_failed(state, created, error)
        }
        Message::CloseForm => form::handle_close_form(state),
    }
}
