//! Ctrl+C / SIGTERM turn into a `Message::Quit` for the shell loop

use tokio::sync::mpsc;

use crate::message::Message;
use shellkit_core::prelude::*;

/// Listen for termination in the background.
///
/// The TUI puts the terminal in raw mode, so Ctrl+C normally arrives as a key
/// event. This covers `kill` and signals sent before raw mode is enabled.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match termination().await {
            Ok(name) => {
                info!(signal = name, "Quitting on signal");
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Shell loop already gone");
                }
            }
            Err(err) => warn!("Signals will not quit the shell: {err}"),
        }
    });
}

#[cfg(unix)]
async fn termination() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::signal(format!("{name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn termination() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::signal(format!("Ctrl+C: {e}")))?;
    Ok("Ctrl+C")
}
