//! journal-app - Application state and orchestration for Skincare Journal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the list controller, the add/edit form, confirmation dialogs,
//! configuration loading, and the Engine shared by the TUI and headless
//! runners.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod list_state;
pub mod message;
pub mod process;
pub mod product_form;
pub mod scroll_debounce;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list_state::{ListState, LoadPhase, PageRequest, PageTicket};
pub use message::Message;
pub use state::{AppState, UiMode};
