//! SIGINT/SIGTERM (Ctrl+C on Windows) become `Message::Quit`, so the run
//! loop leaves through the same path as the `q` key and restores the terminal.

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;

use journal_core::prelude::*;

use crate::message::Message;

/// Which OS request ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "interrupt"),
            ShutdownSignal::Terminate => write!(f, "terminate"),
        }
    }
}

/// Listen for OS shutdown signals for the lifetime of the engine.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(tx, next_shutdown_signal()));
}

/// Await `signal` and turn it into a single quit message.
///
/// A listener that could not be installed sends nothing; the user can still
/// quit from the keyboard.
async fn forward_shutdown<F>(tx: mpsc::Sender<Message>, signal: F)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    match signal.await {
        Ok(kind) => {
            info!("Received {} signal, closing the journal", kind);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine already gone, nothing to stop");
            }
        }
        Err(e) => warn!("Shutdown signals unavailable: {}", e),
    }
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let install = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("{} listener: {}", name, e)))
    };
    let mut interrupt = install(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = install(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C listener: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_becomes_quit_message() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_shutdown(tx, async { Ok(ShutdownSignal::Terminate) }).await;

        assert!(matches!(rx.try_recv(), Ok(Message::Quit)));
    }

    #[tokio::test]
    async fn test_failed_listener_sends_nothing() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        forward_shutdown(tx, async { Err(Error::terminal("no signals")) }).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_engine_channel_is_tolerated() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);

        forward_shutdown(tx, async { Ok(ShutdownSignal::Interrupt) }).await;
    }

    #[tokio::test]
    async fn test_handler_waits_for_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "terminate");
    }
}
