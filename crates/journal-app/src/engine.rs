//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the catalog client and
//! the event broadcaster. Both frontends feed it messages and read state or
//! events back out.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use journal_client::CatalogApi;
use journal_core::FilterState;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::list_state::{ListState, PageTicket};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel and the event broadcaster
const CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    in_flight: Option<PageTicket>,
    item_count: usize,
    filter: FilterState,
    notice: Option<(String, DateTime<Local>)>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            in_flight: state.list.in_flight(),
            item_count: state.list.items.len(),
            filter: state.list.active_filter.clone(),
            notice: state.notice.as_ref().map(|n| (n.message.clone(), n.at)),
        }
    }
}

/// Page response carried by the message being processed
#[derive(Debug, Clone, Copy)]
enum PageOutcome {
    Loaded(PageTicket),
    Failed(PageTicket),
}

impl PageOutcome {
    fn of(msg: &Message) -> Option<Self> {
        match msg {
            Message::PageLoaded { ticket, .. } => Some(Self::Loaded(*ticket)),
            Message::PageLoadFailed { ticket, .. } => Some(Self::Failed(*ticket)),
            _ => None,
        }
    }
}

/// Orchestration engine for the product catalog.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Catalog client used by background actions
/// - Event broadcasting for external consumers
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Validated settings the engine was started with
    pub settings: Settings,

    api: Arc<C>,

    /// Subscribers receive EngineEvents after each message processing cycle.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<C> Engine<C>
where
    C: CatalogApi + Send + Sync + 'static,
{
    /// Create an Engine with an unfiltered list.
    ///
    /// Spawns the signal handler, so this must run inside a tokio runtime.
    pub fn new(api: C, settings: Settings) -> Self {
        Self::with_initial_filter(api, settings, FilterState::default())
    }

    /// Create an Engine whose first page is loaded under `filter`
    pub fn with_initial_filter(api: C, settings: Settings, filter: FilterState) -> Self {
        let list = ListState::with_initial_filter(settings.api.page_size, filter)
            .with_ingredients_expanded(settings.ui.show_ingredients);
        let state = AppState::with_list(settings.clone(), list);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            api: Arc::new(api),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped and the
    /// receiver reports `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for the resulting state changes.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        let outcome = PageOutcome::of(&msg);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(outcome, &pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once every sender has been dropped.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn api(&self) -> &Arc<C> {
        &self.api
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// Requests still in flight are abandoned; their responses are never
    /// processed.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, outcome: Option<PageOutcome>, pre: &StateSnapshot, post: &StateSnapshot) {
        let list = &self.state.list;

        match outcome {
            // Accepted responses clear the in-flight slot; stale ones never held it
            Some(PageOutcome::Loaded(ticket))
                if pre.in_flight == Some(ticket) && post.in_flight != Some(ticket) =>
            {
                let start = if ticket.page == 1 { 0 } else { pre.item_count };
                let items = list.items.get(start..).map(<[_]>::to_vec).unwrap_or_default();
                self.emit(EngineEvent::PageApplied {
                    page: ticket.page,
                    items,
                    total_items: list.total_items,
                    has_more: list.has_more,
                });
            }
            Some(PageOutcome::Failed(ticket))
                if pre.in_flight == Some(ticket) && post.in_flight != Some(ticket) =>
            {
                let error = list
                    .error
                    .clone()
                    .or_else(|| list.inline_error.clone())
                    .unwrap_or_default();
                self.emit(EngineEvent::PageFailed {
                    page: ticket.page,
                    error,
                    blocking: ticket.page == 1,
                });
            }
            Some(_) => debug!("Page response superseded, no event"),
            None => {}
        }

        if pre.filter != post.filter {
            self.emit(EngineEvent::FilterChanged {
                filter: post.filter.clone(),
            });
        }

        if post.notice.is_some() && pre.notice != post.notice {
            if let Some(notice) = &self.state.notice {
                self.emit(EngineEvent::Notice {
                    level: notice.level,
                    message: notice.message.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() fails only when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
