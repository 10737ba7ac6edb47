//! Message types for the application (TEA pattern)

use journal_core::{Page, Product, ProductId};

use crate::input_key::InputKey;
use crate::list_state::PageTicket;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (debounce deadlines, notice expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // List Loading
    // ─────────────────────────────────────────────────────────
    /// Load page 1 under the initial filter and the brand list
    Initialize,
    /// Fetch the brand list if it has not been fetched yet
    LoadBrands,
    /// The selection moved close to the end of the list
    ScrollNearEnd,
    /// Load `current_page + 1` (debounced scroll signal or explicit request)
    LoadNextPage,
    /// Restart from page 1 under the active filter
    Reload,
    PageLoaded { ticket: PageTicket, page: Page },
    PageLoadFailed { ticket: PageTicket, error: String },
    BrandsLoaded(Vec<String>),
    BrandsLoadFailed(String),

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectPageDown,
    SelectPageUp,
    SelectLast,
    /// Jump back to the first product
    ScrollToTop,
    /// Expand/collapse ingredients of the selected product
    ToggleIngredients,

    // ─────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────
    /// Focus the search box
    EnterSearch,
    SearchInsert(char),
    SearchBackspace,
    /// Apply the search box contents
    CommitSearch,
    /// Leave the search box without applying it
    CancelSearch,
    ClearSearch,
    ClearFilters,
    ToggleTag(String),
    CycleProductType,
    CycleBrand,
    CycleSort,

    // ─────────────────────────────────────────────────────────
    // Delete
    // ─────────────────────────────────────────────────────────
    /// Delete the selected product (asks first unless disabled)
    RequestDelete,
    ConfirmDelete { id: ProductId },
    ProductDeleted { id: ProductId },
    DeleteFailed { id: ProductId, error: String },

    // ─────────────────────────────────────────────────────────
    // Confirm Dialog
    // ─────────────────────────────────────────────────────────
    DialogSelectNext,
    CancelDialog,

    // ─────────────────────────────────────────────────────────
    // Add / Edit Form
    // ─────────────────────────────────────────────────────────
    OpenAddForm,
    /// Edit the selected product
    OpenEditForm,
    ProductFetched(Product),
    ProductFetchFailed { id: ProductId, error: String },
    FormInsert(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormCycleType { forward: bool },
    SubmitForm,
    ProductSaved { product: Product, created: bool },
    ProductSaveFailed { created: bool, error: String },
    CloseForm,

    DismissNotice,
}
