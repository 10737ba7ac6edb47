//! Main TUI runner - entry point and event loop

use journal_app::message::Message;
use journal_app::Engine;
use journal_client::CatalogApi;
use journal_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI over an Engine until the user quits.
///
/// Sends `Initialize` so the first page and the brand list start loading
/// before the first frame is drawn.
pub async fn run<C>(mut engine: Engine<C>) -> Result<()>
where
    C: CatalogApi + Send + Sync + 'static,
{
    let mut term = terminal::init();

    info!(
        "Skincare Journal starting against {}",
        engine.settings.api.base_url
    );
    engine.process_message(Message::Initialize);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    result
}

/// Main event loop
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: CatalogApi + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Responses from background fetches, signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
