//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action is one catalog request. The request runs on its own tokio
//! task and reports back through the message channel, so the update loop
//! never blocks on the network.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use journal_client::CatalogApi;
use journal_core::{ProductDraft, ProductId};

use crate::list_state::PageRequest;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<C>)
where
    C: CatalogApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchPage(request) => spawn_fetch_page(request, msg_tx, api),
        UpdateAction::FetchBrands => spawn_fetch_brands(msg_tx, api),
        UpdateAction::FetchProduct { id } => spawn_fetch_product(id, msg_tx, api),
        UpdateAction::CreateProduct { draft } => spawn_save_product(None, draft, msg_tx, api),
        UpdateAction::UpdateProduct { id, draft } => {
            spawn_save_product(Some(id), draft, msg_tx, api)
        }
        UpdateAction::DeleteProduct { id } => spawn_delete_product(id, msg_tx, api),
    }
}

/// Fetch one page. The ticket travels with the response so the list can
/// drop it if a newer request superseded it meanwhile.
fn spawn_fetch_page<C>(request: PageRequest, msg_tx: mpsc::Sender<Message>, api: Arc<C>)
where
    C: CatalogApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let PageRequest { ticket, query } = request;
        debug!(
            "Fetching page {} (generation {})",
            ticket.page, ticket.generation
        );

        let msg = match api.list_products(&query).await {
            Ok(page) => Message::PageLoaded { ticket, page },
            Err(e) => {
                warn!("Failed to fetch page {}: {}", ticket.page, e);
                Message::PageLoadFailed {
                    ticket,
                    error: e.to_string(),
                }
            }
        };
        let _ = msg_tx.send(msg).await;
    });
}

fn spawn_fetch_brands<C>(msg_tx: mpsc::Sender<Message>, api: Arc<C>)
where
    C: CatalogApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match api.list_brands().await {
            Ok(brands) => Message::BrandsLoaded(brands),
            Err(e) => {
                warn!("Failed to fetch brands: {}", e);
                Message::BrandsLoadFailed(e.to_string())
            }
        };
        let _ = msg_tx.send(msg).await;
    });
}

fn spawn_fetch_product<C>(id: ProductId, msg_tx: mpsc::Sender<Message>, api: Arc<C>)
where
    C: CatalogApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match api.get_product(id).await {
            Ok(product) => Message::ProductFetched(product),
            Err(e) => Message::ProductFetchFailed {
                id,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Create (`id == None`) or update a product
fn spawn_save_product<C>(
    id: Option<ProductId>,
    draft: ProductDraft,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<C>,
) where
    C: CatalogApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let created = id.is_none();
        let result = match id {
            None => api.create_product(&draft).await,
            Some(id) => api.update_product(id, &draft).await,
        };

        let msg = match result {
            Ok(product) => Message::ProductSaved { product, created },
            Err(e) => Message::ProductSaveFailed {
                created,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

fn spawn_delete_product<C>(id: ProductId, msg_tx: mpsc::Sender<Message>, api: Arc<C>)
where
    C: CatalogApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match api.delete_product(id).await {
            Ok(()) => Message::ProductDeleted { id },
            Err(e) => Message::DeleteFailed {
                id,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_state::PageTicket;
    use journal_client::test_utils::{test_page, test_product, MockCatalog, RecordedCall};
    use journal_core::{Error, FilterState, PageQuery};

    fn request(page: u32) -> PageRequest {
        PageRequest {
            ticket: PageTicket {
                generation: 1,
                page,
            },
            query: PageQuery::new(page, 20, FilterState::default()),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_reports_loaded_page_with_ticket() {
        let api = Arc::new(MockCatalog::new());
        api.push_page(test_page(2, vec![test_product(7, "Toner")], 21, 2));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchPage(request(2)), tx, api.clone());

        match rx.recv().await {
            Some(Message::PageLoaded { ticket, page }) => {
                assert_eq!(ticket.page, 2);
                assert_eq!(page.items.len(), 1);
            }
            other => panic!("expected PageLoaded, got {other:?}"),
        }
        assert_eq!(api.list_queries()[0].page, 2);
    }

    #[tokio::test]
    async fn test_fetch_page_failure_keeps_ticket() {
        let api = Arc::new(MockCatalog::new());
        api.push_page_error(Error::network("connection refused"));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchPage(request(1)), tx, api);

        assert!(matches!(
            rx.recv().await,
            Some(Message::PageLoadFailed { ticket, .. }) if ticket.page == 1
        ));
    }

    #[tokio::test]
    async fn test_fetch_brands() {
        let api = Arc::new(MockCatalog::new().with_brands(&["COSRX", "Laneige"]));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchBrands, tx, api);

        assert!(matches!(
            rx.recv().await,
            Some(Message::BrandsLoaded(brands)) if brands.len() == 2
        ));
    }

    #[tokio::test]
    async fn test_fetch_missing_product_fails() {
        let api = Arc::new(MockCatalog::new());
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchProduct { id: 42 }, tx, api);

        assert!(matches!(
            rx.recv().await,
            Some(Message::ProductFetchFailed { id: 42, .. })
        ));
    }

    #[tokio::test]
    async fn test_create_and_update_report_created_flag() {
        let api = Arc::new(MockCatalog::new().with_product(test_product(3, "Serum")));
        let draft = ProductDraft::from(&test_product(0, "Cream"));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CreateProduct {
                draft: draft.clone(),
            },
            tx.clone(),
            api.clone(),
        );
        assert!(matches!(
            rx.recv().await,
            Some(Message::ProductSaved { created: true, .. })
        ));

        handle_action(UpdateAction::UpdateProduct { id: 3, draft }, tx, api.clone());
        assert!(matches!(
            rx.recv().await,
            Some(Message::ProductSaved { created: false, product }) if product.id == 3
        ));

        assert_eq!(
            api.count_calls(|c| matches!(
                c,
                RecordedCall::CreateProduct(_) | RecordedCall::UpdateProduct(..)
            )),
            2
        );
    }

    #[tokio::test]
    async fn test_delete_success_and_failure() {
        let api = Arc::new(MockCatalog::new());
        api.push_delete_result(Ok(()));
        api.push_delete_result(Err(Error::rejected(500, "http://localhost/api/products/1")));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::DeleteProduct { id: 1 }, tx.clone(), api.clone());
        assert!(matches!(
            rx.recv().await,
            Some(Message::ProductDeleted { id: 1 })
        ));

        handle_action(UpdateAction::DeleteProduct { id: 1 }, tx, api);
        assert!(matches!(
            rx.recv().await,
            Some(Message::DeleteFailed { id: 1, .. })
        ));
    }
}
