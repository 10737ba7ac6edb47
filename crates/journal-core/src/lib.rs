//! # journal-core - Core Domain Types
//!
//! Foundation crate for Skincare Journal. Provides the catalog domain types,
//! filter criteria, the page model, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Product`], [`ProductDraft`] - Stored product and create/update body
//! - [`ProductType`], [`SortKey`] - Filter/sort vocabularies
//! - [`FilterState`] - The active list criteria
//! - [`AVAILABLE_TAGS`], [`tag_label()`] - Tag filter vocabulary
//!
//! ### Pagination (`page`)
//! - [`Page`] - One page of results with optional server metadata
//! - [`PageQuery`] - Page number, size and filter for a list request
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum; catalog failures grouped by `is_request_failure`
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs a context line on error
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use journal_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use page::{Page, PageQuery};
pub use types::{
    product_type_label, tag_label, FilterState, Product, ProductDraft, ProductId, ProductType,
    SortKey, AVAILABLE_TAGS,
};
