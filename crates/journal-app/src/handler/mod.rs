//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `list`: List loading, selection, filter and delete handlers
//! - `form`: Add/Edit form handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod list;
pub(crate) mod update;


use journal_core::{ProductDraft, ProductId};

use crate::list_state::PageRequest;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update.
///
/// Every action is a catalog request run as a background task; its outcome
/// comes back as a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch one page; answered by `PageLoaded` / `PageLoadFailed`
    FetchPage(PageRequest),

    /// Fetch the brand list; answered by `BrandsLoaded` / `BrandsLoadFailed`
    FetchBrands,

    /// Load a product into the edit form
    FetchProduct { id: ProductId },

    CreateProduct { draft: ProductDraft },

    UpdateProduct { id: ProductId, draft: ProductDraft },

    DeleteProduct { id: ProductId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn fetch(request: PageRequest) -> Self {
        Self::action(UpdateAction::FetchPage(request))
    }

    /// Attach a follow-up message
    pub fn then(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
