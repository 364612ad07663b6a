//! OS signal handling
//!
//! SIGINT, SIGTERM and SIGHUP (Ctrl+C on Windows) become [`Message::Quit`]
//! so the terminal is restored by the normal shutdown path.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use specview_core::prelude::*;

/// Spawn a task that turns the first termination signal into a quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Failed to listen for {}: {}", name, e)))
    };
    let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
        _ = sighup.recv() => "SIGHUP",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_handler_spawn_is_idle_until_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let handle = spawn_signal_handler(tx);

        assert!(rx.try_recv().is_err());
        handle.abort();
    }
}
