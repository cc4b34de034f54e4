//! OS signal handling
//!
//! SIGINT/SIGTERM are translated into [`Message::Quit`]. In raw mode Ctrl+C
//! arrives as a key event instead, so this mainly covers `kill` and signals
//! delivered before the terminal is set up.

use tokio::sync::mpsc;

use pomo_core::prelude::*;

use crate::message::Message;

/// Spawn a task that waits for a termination signal and requests quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return;
        }

        info!("Quit requested by signal");
        let _ = tx.send(Message::Quit).await;
    });
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("cannot listen for SIGINT: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("cannot listen for SIGTERM: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => debug!("SIGINT"),
            _ = sigterm.recv() => debug!("SIGTERM"),
        }

        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
        debug!("Ctrl+C");
        Ok(())
    }
}
