//! Key event handlers for different UI modes

use journal_core::AVAILABLE_TAGS;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::product_form::FormField;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::Form => handle_key_form(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
    }
}

/// Handle key events in confirm dialog mode
fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog.as_ref()?;
    match key {
        InputKey::Char('y' | 'Y') => dialog.confirm_message(),
        InputKey::Enter => dialog.selected_message(),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDialog),
        InputKey::Tab | InputKey::BackTab | InputKey::Left | InputKey::Right => {
            Some(Message::DialogSelectNext)
        }
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        // Leave the box, keep the applied search
        InputKey::Esc => Some(Message::CancelSearch),

        InputKey::Enter => Some(Message::CommitSearch),

        InputKey::Backspace => Some(Message::SearchBackspace),

        // Clear and apply an empty search
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),

        InputKey::Char(c) => Some(Message::SearchInsert(c)),

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in the add/edit form
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let on_type_field = state
        .form
        .as_ref()
        .is_some_and(|f| f.focused == FormField::ProductType);

    match key {
        InputKey::Esc => Some(Message::CloseForm),
        InputKey::CharCtrl('s') | InputKey::Enter => Some(Message::SubmitForm),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),
        InputKey::Backspace => Some(Message::FormBackspace),

        InputKey::Right | InputKey::Char(' ') if on_type_field => {
            Some(Message::FormCycleType { forward: true })
        }
        InputKey::Left if on_type_field => Some(Message::FormCycleType { forward: false }),

        InputKey::Char(c) => Some(Message::FormInsert(c)),

        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Esc if state.notice.is_some() => Some(Message::DismissNotice),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::SelectPageDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::SelectPageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),
        InputKey::Char('n') => Some(Message::LoadNextPage),
        InputKey::Char('i') => Some(Message::ToggleIngredients),

        // Retry after a blocking error, or refresh
        InputKey::Char('r') => Some(Message::Reload),

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') => Some(Message::EnterSearch),
        InputKey::Char('x') => Some(Message::ClearSearch),
        InputKey::Char('c') => Some(Message::ClearFilters),
        InputKey::Char('t') => Some(Message::CycleProductType),
        InputKey::Char('b') => Some(Message::CycleBrand),
        InputKey::Char('s') => Some(Message::CycleSort),
        InputKey::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10)? as usize - 1;
            AVAILABLE_TAGS
                .get(idx)
                .map(|tag| Message::ToggleTag(tag.to_string()))
        }

        // ─────────────────────────────────────────────────────────
        // Products
        // ─────────────────────────────────────────────────────────
        InputKey::Char('a') => Some(Message::OpenAddForm),
        InputKey::Char('e') | InputKey::Enter => Some(Message::OpenEditForm),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDelete),

        _ => None,
    }
}
