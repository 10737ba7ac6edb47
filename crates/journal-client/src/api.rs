//! Catalog service operations
//!
//! This module provides the [`CatalogApi`] trait consumed by the application
//! layer. The HTTP implementation lives in [`crate::http`]; tests use
//! `test_utils::MockCatalog`.

use journal_core::prelude::*;
use journal_core::{Page, PageQuery, Product, ProductDraft, ProductId};

/// Operations exposed by the remote product collection.
///
/// Implement [`CatalogApi`] (the `Send` variant); the local variant is
/// derived automatically.
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// `GET /products?page=&limit=&...`: one page of the filtered collection
    async fn list_products(&self, query: &PageQuery) -> Result<Page>;

    /// `GET /products/brands`: every brand name known to the service
    async fn list_brands(&self) -> Result<Vec<String>>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> Result<Product>;

    /// `POST /products`
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product>;

    /// `PUT /products/{id}`
    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> Result<Product>;

    /// `DELETE /products/{id}`: success/failure only
    async fn delete_product(&self, id: ProductId) -> Result<()>;
}
