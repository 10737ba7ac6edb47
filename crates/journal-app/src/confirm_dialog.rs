//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in journal-tui's widgets/confirm_dialog.rs.

use journal_core::Product;

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    /// Index into `options` that Enter activates
    pub selected: usize,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Create a delete confirmation dialog. Cancel is preselected.
    pub fn delete_confirmation(product: &Product) -> Self {
        let mut dialog = Self::new(
            "Delete Product?",
            format!(
                "Are you sure you want to delete \"{}\"?",
                product.name.trim()
            ),
            vec![
                ("Delete", Message::ConfirmDelete { id: product.id }),
                ("Cancel", Message::CancelDialog),
            ],
        );
        dialog.selected = 1;
        dialog
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Message of the highlighted option
    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }

    /// Message of the first (affirmative) option
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}
