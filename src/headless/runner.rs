//! Headless mode runner - main event loop without TUI
//!
//! Drives the Engine through page loads and turns its events into
//! [`HeadlessEvent`]s.

use std::process::ExitCode;

use tokio::sync::broadcast::error::TryRecvError;

use journal_app::{message::Message, Engine, EngineEvent};
use journal_client::CatalogApi;
use journal_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - print NDJSON events instead of drawing the TUI.
///
/// Loads pages until the catalog reports no more, or `max_pages` have been
/// loaded. A failed page ends the run with a failure exit code.
pub async fn run_headless<C>(mut engine: Engine<C>, max_pages: Option<u32>) -> Result<ExitCode>
where
    C: CatalogApi + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Skincare Journal starting in HEADLESS mode");
    info!("Catalog: {}", engine.settings.api.base_url);
    info!("═══════════════════════════════════════════════════════");

    let succeeded = headless_event_loop(&mut engine, max_pages, |event| event.emit()).await;

    engine.shutdown();

    info!("Skincare Journal headless mode exiting");
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Main headless event loop. Returns false if a page failed.
pub async fn headless_event_loop<C, F>(
    engine: &mut Engine<C>,
    max_pages: Option<u32>,
    mut sink: F,
) -> bool
where
    C: CatalogApi + Send + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut events = engine.subscribe();
    let mut pages_loaded: u32 = 0;
    let mut succeeded = true;

    engine.process_message(Message::Initialize);

    while !engine.should_quit() {
        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }

        loop {
            let event = match events.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Headless runner missed {} engine events", skipped);
                    continue;
                }
                Err(_) => break,
            };
            debug!("Engine event: {}", event.event_type());

            match event {
                EngineEvent::PageApplied {
                    page,
                    items,
                    total_items,
                    has_more,
                } => {
                    pages_loaded += 1;
                    sink(HeadlessEvent::page_loaded(
                        page,
                        items.len(),
                        total_items,
                        has_more,
                    ));
                    for product in &items {
                        sink(HeadlessEvent::product(page, product));
                    }

                    let limit_reached = max_pages.is_some_and(|max| pages_loaded >= max);
                    if has_more && !limit_reached {
                        engine.process_message(Message::LoadNextPage);
                    } else {
                        sink(HeadlessEvent::finished(
                            pages_loaded,
                            engine.state.list.items.len(),
                            total_items,
                        ));
                        engine.process_message(Message::Quit);
                    }
                }
                EngineEvent::PageFailed { page, error, .. } => {
                    error!("Headless page {} failed: {}", page, error);
                    sink(HeadlessEvent::error(format!("page {page}: {error}"), true));
                    succeeded = false;
                    engine.process_message(Message::Quit);
                }
                EngineEvent::FilterChanged { .. }
                | EngineEvent::Notice { .. }
                | EngineEvent::Shutdown => {}
            }
        }
    }

    succeeded
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_app::config::Settings;
    use journal_client::test_utils::{test_page, test_product, MockCatalog};
    use journal_core::Product;
    use std::time::Duration;

    fn products(range: std::ops::RangeInclusive<i64>) -> Vec<Product> {
        range.map(|id| test_product(id, &format!("P{id}"))).collect()
    }

    async fn collect(mock: MockCatalog, max_pages: Option<u32>) -> (bool, Vec<HeadlessEvent>) {
        let mut engine = Engine::new(mock, Settings::default());
        let mut events = Vec::new();
        let succeeded = tokio::time::timeout(
            Duration::from_secs(2),
            headless_event_loop(&mut engine, max_pages, |e| events.push(e)),
        )
        .await
        .expect("headless loop did not finish");
        (succeeded, events)
    }

    fn names(events: &[HeadlessEvent]) -> Vec<&'static str> {
        events.iter().map(HeadlessEvent::name).collect()
    }

    #[tokio::test]
    async fn test_loads_every_page_then_finishes() {
        let mock = MockCatalog::new();
        mock.push_page(test_page(1, products(1..=2), 3, 2));
        mock.push_page(test_page(2, products(3..=3), 3, 2));

        let (succeeded, events) = collect(mock, None).await;

        assert!(succeeded);
        assert_eq!(
            names(&events),
            vec![
                "page_loaded",
                "product",
                "product",
                "page_loaded",
                "product",
                "finished"
            ]
        );
        match events.last() {
            Some(HeadlessEvent::Finished {
                pages, products, ..
            }) => {
                assert_eq!(*pages, 2);
                assert_eq!(*products, 3);
            }
            other => panic!("expected finished, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_max_pages_stops_early() {
        let mock = MockCatalog::new();
        mock.push_page(test_page(1, products(1..=2), 6, 3));
        mock.push_page(test_page(2, products(3..=4), 6, 3));

        let (succeeded, events) = collect(mock, Some(1)).await;

        assert!(succeeded);
        assert_eq!(names(&events).last(), Some(&"finished"));
        assert_eq!(
            names(&events).iter().filter(|n| **n == "page_loaded").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_finishes_after_first_page() {
        let (succeeded, events) = collect(MockCatalog::new(), None).await;

        assert!(succeeded);
        assert_eq!(names(&events), vec!["page_loaded", "finished"]);
    }

    #[tokio::test]
    async fn test_failed_page_reports_error() {
        let mock = MockCatalog::new();
        mock.push_page_error(Error::network("connection refused"));

        let (succeeded, events) = collect(mock, None).await;

        assert!(!succeeded);
        assert_eq!(names(&events), vec!["error"]);
    }
}
