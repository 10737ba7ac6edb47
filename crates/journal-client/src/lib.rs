//! # journal-client - Catalog Service Client
//!
//! Talks to the remote product collection over JSON/HTTP.
//!
//! Depends on [`journal_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Service Boundary
//! - [`CatalogApi`] - Async operations on the product collection
//! - [`LocalCatalogApi`] - Non-`Send` variant of the same trait
//!
//! ### HTTP Implementation
//! - [`HttpCatalog`] - reqwest-backed implementation
//! - [`parse_base_url()`] - Validate a configured base URL
//! - [`list_query_pairs()`] - Query-string encoding for list requests
//!
//! ### Testing
//! - `test_utils::MockCatalog` (feature `test-helpers`) - Scripted in-memory catalog

pub mod api;
pub mod http;
pub mod query;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{CatalogApi, LocalCatalogApi};
pub use http::{parse_base_url, HttpCatalog, DEFAULT_BASE_URL};
pub use query::list_query_pairs;
