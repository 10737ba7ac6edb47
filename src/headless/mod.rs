//! Headless mode - JSON event output instead of the TUI
//!
//! Loads pages under the filter given on the command line and writes one
//! NDJSON event per line to stdout, so scripts can read the catalog without
//! parsing terminal output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"page_loaded","page":1,"count":2,"total_items":2,"has_more":false,"timestamp":1704700001000}
//! {"event":"product","page":1,"id":7,"name":"Snail Essence","brand":"COSRX","product_type":"Essence","price":1250,"timestamp":1704700001000}
//! {"event":"finished","pages":1,"products":2,"total_items":2,"timestamp":1704700001000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use journal_core::{Product, ProductId};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A page response was accepted
    PageLoaded {
        page: u32,
        count: usize,
        total_items: Option<u64>,
        has_more: bool,
        timestamp: i64,
    },

    /// One product added by the last page
    Product {
        page: u32,
        id: ProductId,
        name: String,
        brand: String,
        product_type: String,
        price: Option<i64>,
        timestamp: i64,
    },

    /// Loading stopped: no more pages, or the page limit was reached
    Finished {
        pages: u32,
        products: usize,
        total_items: Option<u64>,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn page_loaded(page: u32, count: usize, total_items: Option<u64>, has_more: bool) -> Self {
        Self::PageLoaded {
            page,
            count,
            total_items,
            has_more,
            timestamp: Self::now(),
        }
    }

    pub fn product(page: u32, product: &Product) -> Self {
        Self::Product {
            page,
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            product_type: product.product_type.clone(),
            price: product.price,
            timestamp: Self::now(),
        }
    }

    pub fn finished(pages: u32, products: usize, total_items: Option<u64>) -> Self {
        Self::Finished {
            pages,
            products,
            total_items,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Event name as it appears in the `event` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageLoaded { .. } => "page_loaded",
            Self::Product { .. } => "product",
            Self::Finished { .. } => "finished",
            Self::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_client::test_utils::test_product;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_page_loaded_serialization() {
        let value = to_value(&HeadlessEvent::page_loaded(2, 20, Some(45), true));

        assert_eq!(value["event"], "page_loaded");
        assert_eq!(value["page"], 2);
        assert_eq!(value["count"], 20);
        assert_eq!(value["total_items"], 45);
        assert_eq!(value["has_more"], true);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_product_serialization() {
        let value = to_value(&HeadlessEvent::product(1, &test_product(7, "Snail Essence")));

        assert_eq!(value["event"], "product");
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Snail Essence");
        assert_eq!(value["product_type"], "Serum");
        assert_eq!(value["price"], 10);
    }

    #[test]
    fn test_unknown_total_serializes_as_null() {
        let value = to_value(&HeadlessEvent::finished(1, 3, None));

        assert_eq!(value["event"], "finished");
        assert!(value["total_items"].is_null());
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("Connection refused".to_string(), true));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Connection refused");
        assert_eq!(value["fatal"], true);
    }

    #[test]
    fn test_name_matches_tag() {
        let event = HeadlessEvent::finished(0, 0, None);
        assert_eq!(to_value(&event)["event"], event.name());
    }
}
