//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use journal_core::{FilterState, Product};

use crate::state::NoticeLevel;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // List Loading
    // ─────────────────────────────────────────────────────────
    /// A page response was accepted into the list
    PageApplied {
        page: u32,
        /// Items this page added (all items when `page == 1`)
        items: Vec<Product>,
        total_items: Option<u64>,
        has_more: bool,
    },

    /// The in-flight page request failed
    PageFailed {
        page: u32,
        error: String,
        /// Page 1 failures replace the list with an error view
        blocking: bool,
    },

    /// The active filter changed and page 1 is being reloaded
    FilterChanged { filter: FilterState },

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────
    /// A status notice was raised (delete, add, update outcomes)
    Notice { level: NoticeLevel, message: String },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PageApplied { .. } => "page_applied",
            Self::PageFailed { .. } => "page_failed",
            Self::FilterChanged { .. } => "filter_changed",
            Self::Notice { .. } => "notice",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_event_type_labels() {
        let events = [
            (
                EngineEvent::PageApplied {
                    page: 1,
                    items: Vec::new(),
                    total_items: None,
                    has_more: false,
                },
                "page_applied",
            ),
            (
                EngineEvent::PageFailed {
                    page: 2,
                    error: "Failed to fetch products".into(),
                    blocking: false,
                },
                "page_failed",
            ),
            (
                EngineEvent::FilterChanged {
                    filter: FilterState::default(),
                },
                "filter_changed",
            ),
            (
                EngineEvent::Notice {
                    level: NoticeLevel::Success,
                    message: "Product deleted successfully!".into(),
                },
                "notice",
            ),
            (EngineEvent::Shutdown, "shutdown"),
        ];

        for (event, label) in events {
            assert_eq!(event.event_type(), label);
        }
    }
}
