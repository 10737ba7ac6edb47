//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches every resulting action.

use std::sync::Arc;

use tokio::sync::mpsc;

use journal_client::CatalogApi;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<C>,
) where
    C: CatalogApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(api));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
