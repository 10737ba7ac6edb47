//! Add/Edit form handlers

use journal_core::{Product, ProductId};
use tracing::warn;

use crate::message::Message;
use crate::product_form::{FormField, FormMode, ProductFormState};
use crate::state::{AppState, Notice};

use super::{UpdateAction, UpdateResult};

pub fn handle_open_add_form(state: &mut AppState) -> UpdateResult {
    state.open_form(ProductFormState::new_add());
    UpdateResult::none()
}

/// Open the edit form for the selected product and load it from the service.
pub fn handle_open_edit_form(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.list.selected_product().map(|p| p.id) else {
        return UpdateResult::none();
    };
    state.open_form(ProductFormState::new_edit(id));
    UpdateResult::action(UpdateAction::FetchProduct { id })
}

pub fn handle_product_fetched(state: &mut AppState, product: Product) -> UpdateResult {
    match state.form.as_mut() {
        Some(form) if form.editing_id() == Some(product.id) => form.load_product(&product),
        _ => warn!("Ignoring fetched product {}, no matching form", product.id),
    }
    UpdateResult::none()
}

pub fn handle_product_fetch_failed(state: &mut AppState, id: ProductId, error: String) -> UpdateResult {
    warn!("Failed to fetch product {}: {}", id, error);
    if state.form.as_ref().and_then(|f| f.editing_id()) == Some(id) {
        state.close_form();
    }
    state.show_notice(Notice::error("Error fetching product"));
    UpdateResult::none()
}

fn with_form(state: &mut AppState, f: impl FnOnce(&mut ProductFormState)) -> UpdateResult {
    if let Some(form) = state.form.as_mut() {
        f(form);
    }
    UpdateResult::none()
}

pub fn handle_form_insert(state: &mut AppState, c: char) -> UpdateResult {
    with_form(state, |form| form.insert_char(c))
}

pub fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    with_form(state, |form| form.backspace())
}

pub fn handle_form_next_field(state: &mut AppState) -> UpdateResult {
    with_form(state, |form| form.focus_next())
}

pub fn handle_form_prev_field(state: &mut AppState) -> UpdateResult {
    with_form(state, |form| form.focus_prev())
}

pub fn handle_form_cycle_type(state: &mut AppState, forward: bool) -> UpdateResult {
    with_form(state, |form| {
        if form.focused == FormField::ProductType {
            form.cycle_product_type(forward);
        }
    })
}

pub fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };
    if !form.is_editable() {
        return UpdateResult::none();
    }

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(message) => {
            form.error = Some(message);
            return UpdateResult::none();
        }
    };

    form.begin_submit();
    let action = match form.mode {
        FormMode::Add => UpdateAction::CreateProduct { draft },
        FormMode::Edit { id } => UpdateAction::UpdateProduct { id, draft },
    };
    UpdateResult::action(action)
}

/// Close the form, announce the save and refresh the list.
pub fn handle_product_saved(state: &mut AppState, product: Product, created: bool) -> UpdateResult {
    tracing::debug!("Saved product {} ({})", product.id, product.name);
    state.close_form();
    state.show_notice(Notice::success(if created {
        "Product added successfully!"
    } else {
        "Product updated successfully!"
    }));
    UpdateResult::message(Message::Reload)
}

pub fn handle_product_save_failed(state: &mut AppState, created: bool, error: String) -> UpdateResult {
    warn!("Failed to save product: {}", error);
    let message = if created {
        "Error adding product"
    } else {
        "Error updating product"
    };
    if let Some(form) = state.form.as_mut() {
        form.submit_failed(message);
    }
    state.show_notice(Notice::error(message));
    UpdateResult::none()
}

pub fn handle_close_form(state: &mut AppState) -> UpdateResult {
    state.close_form();
    UpdateResult::none()
}
