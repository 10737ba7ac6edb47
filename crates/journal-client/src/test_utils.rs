//! Test utilities: a scripted in-memory catalog
//!
//! [`MockCatalog`] records every call it receives and answers from queues of
//! scripted responses, so application tests can assert on the exact requests
//! the list controller issues.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use journal_core::prelude::*;
use journal_core::{Page, PageQuery, Product, ProductDraft, ProductId};

use crate::api::CatalogApi;

/// A call received by the mock, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    ListProducts(PageQuery),
    ListBrands,
    GetProduct(ProductId),
    CreateProduct(ProductDraft),
    UpdateProduct(ProductId, ProductDraft),
    DeleteProduct(ProductId),
}

/// A scripted reply, optionally delayed to force out-of-order completion
#[derive(Debug)]
struct Scripted<T> {
    result: Result<T>,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct MockInner {
    calls: Vec<RecordedCall>,
    pages: VecDeque<Scripted<Page>>,
    brands: Vec<String>,
    products: HashMap<ProductId, Product>,
    delete_results: VecDeque<Result<()>>,
    save_results: VecDeque<Result<()>>,
    next_id: ProductId,
}

/// In-memory catalog for tests.
///
/// Unscripted list calls answer with an empty final page; unscripted deletes
/// and saves succeed.
#[derive(Debug, Default)]
pub struct MockCatalog {
    inner: Mutex<MockInner>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_brands(self, brands: &[&str]) -> Self {
        self.lock().brands = brands.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_product(self, product: Product) -> Self {
        {
            let mut inner = self.lock();
            inner.next_id = inner.next_id.max(product.id);
            inner.products.insert(product.id, product);
        }
        self
    }

    /// Queue the next list response
    pub fn push_page(&self, page: Page) {
        self.lock().pages.push_back(Scripted {
            result: Ok(page),
            delay: None,
        });
    }

    /// Queue the next list response, delivered after `delay`
    pub fn push_page_delayed(&self, page: Page, delay: Duration) {
        self.lock().pages.push_back(Scripted {
            result: Ok(page),
            delay: Some(delay),
        });
    }

    /// Queue a failing list response
    pub fn push_page_error(&self, error: Error) {
        self.lock().pages.push_back(Scripted {
            result: Err(error),
            delay: None,
        });
    }

    pub fn push_delete_result(&self, result: Result<()>) {
        self.lock().delete_results.push_back(result);
    }

    pub fn push_save_result(&self, result: Result<()>) {
        self.lock().save_results.push_back(result);
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Only the list queries received so far
    pub fn list_queries(&self) -> Vec<PageQuery> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::ListProducts(q) => Some(q.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count_calls(&self, predicate: impl Fn(&RecordedCall) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: RecordedCall) {
        self.lock().calls.push(call);
    }
}

impl CatalogApi for MockCatalog {
    async fn list_products(&self, query: &PageQuery) -> Result<Page> {
        let scripted = {
            let mut inner = self.lock();
            inner.calls.push(RecordedCall::ListProducts(query.clone()));
            inner.pages.pop_front()
        };
        match scripted {
            Some(Scripted { result, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(Page {
                page: Some(query.page),
                items: Vec::new(),
                total_items: Some(0),
                total_pages: Some(query.page),
            }),
        }
    }

    async fn list_brands(&self) -> Result<Vec<String>> {
        self.record(RecordedCall::ListBrands);
        Ok(self.lock().brands.clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.record(RecordedCall::GetProduct(id));
        self.lock()
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::rejected(404, format!("/products/{id}")))
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
        let mut inner = self.lock();
        inner.calls.push(RecordedCall::CreateProduct(draft.clone()));
        inner.save_results.pop_front().unwrap_or(Ok(()))?;
        inner.next_id += 1;
        let product = draft.clone().with_id(inner.next_id);
        inner.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> Result<Product> {
        let mut inner = self.lock();
        inner
            .calls
            .push(RecordedCall::UpdateProduct(id, draft.clone()));
        inner.save_results.pop_front().unwrap_or(Ok(()))?;
        let product = draft.clone().with_id(id);
        inner.products.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let mut inner = self.lock();
        inner.calls.push(RecordedCall::DeleteProduct(id));
        inner.delete_results.pop_front().unwrap_or(Ok(()))?;
        inner.products.remove(&id);
        Ok(())
    }
}

/// Creates a product with only the fields the list view cares about.
pub fn test_product(id: ProductId, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand: "Test Brand".to_string(),
        ingredients_list: String::new(),
        star_ingredients: String::new(),
        product_type: "Serum".to_string(),
        price: Some(10),
    }
}

/// Creates a page with full server metadata.
pub fn test_page(page: u32, items: Vec<Product>, total_items: u64, total_pages: u32) -> Page {
    Page {
        page: Some(page),
        items,
        total_items: Some(total_items),
        total_pages: Some(total_pages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::FilterState;

    #[tokio::test]
    async fn test_mock_records_calls_and_serves_pages() {
        let mock = MockCatalog::new().with_brands(&["COSRX", "Laneige"]);
        mock.push_page(test_page(1, vec![test_product(1, "A")], 1, 1));

        let query = PageQuery::new(1, 20, FilterState::default());
        let page = mock.list_products(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);

        let brands = mock.list_brands().await.unwrap();
        assert_eq!(brands, vec!["COSRX", "Laneige"]);

        assert_eq!(
            mock.calls(),
            vec![RecordedCall::ListProducts(query), RecordedCall::ListBrands]
        );
    }

    #[test]
    fn test_unscripted_list_is_empty_final_page() {
        let mock = MockCatalog::new();
        let page = tokio_test::block_on(
            mock.list_products(&PageQuery::new(3, 20, FilterState::default())),
        )
        .unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more(3, 0));
    }

    #[tokio::test]
    async fn test_scripted_delete_failure() {
        let mock = MockCatalog::new().with_product(test_product(5, "E"));
        mock.push_delete_result(Err(Error::rejected(500, "/products/5")));

        assert!(mock.delete_product(5).await.is_err());
        assert!(mock.get_product(5).await.is_ok());

        assert!(mock.delete_product(5).await.is_ok());
        assert!(mock.get_product(5).await.is_err());
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let mock = MockCatalog::new().with_product(test_product(10, "J"));
        let created = mock
            .create_product(&ProductDraft {
                name: "New".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, 11);
    }
}
