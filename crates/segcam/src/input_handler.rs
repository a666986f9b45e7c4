//! Terminal key handler.
//!
//! Reads commands from stdin one line at a time and forwards them to the
//! application loop: Enter or `r` toggles recording, `s` and `p` drop and
//! recreate the preview surface, `q` quits.

use crate::{AppCommand, AppError, AppResult};

use std::{
    io::{self, BufRead},
    panic::Location,
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Surface id the application binds at startup.
pub(crate) const INITIAL_SURFACE_ID: u64 = 1;

/// Turns terminal input into [`AppCommand`]s.
pub struct InputHandler {
    command_tx: mpsc::Sender<AppCommand>,
    next_surface_id: u64,
}

impl InputHandler {
    /// Create a handler sending to `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            command_tx,
            next_surface_id: INITIAL_SURFACE_ID + 1,
        }
    }

    /// Map one input line to a command. Unknown input maps to `None`.
    pub fn parse_command(&mut self, line: &str) -> Option<AppCommand> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" => Some(AppCommand::Tap),
            "s" => Some(AppCommand::SurfaceDestroyed),
            "p" => {
                let id = self.next_surface_id;
                self.next_surface_id += 1;
                Some(AppCommand::SurfaceCreated { id })
            }
            "q" => Some(AppCommand::Shutdown),
            _ => None,
        }
    }

    /// Run the input loop until shutdown is signalled or stdin closes.
    ///
    /// Closing stdin requests application shutdown.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);

        // Stdin has no async read without extra runtime features, so a
        // single blocking task forwards lines. It exits on EOF, or on the
        // first send after `line_rx` is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Input handler shutting down");
                    break;
                }
                line = line_rx.recv() => {
                    let Some(line) = line else {
                        info!("Stdin closed, requesting shutdown");
                        self.send(AppCommand::Shutdown).await?;
                        break;
                    };

                    match self.parse_command(&line) {
                        Some(command) => self.send(command).await?,
                        None => warn!(input = %line.trim(), "Unknown command"),
                    }
                }
            }
        }

        drop(line_rx);

        // The blocking task may sit in a read until the next line arrives.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Stdin forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Stdin forwarder task panicked"),
            Err(_) => debug!("Stdin forwarder still blocked on read, will be cleaned up on exit"),
        }

        Ok(())
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        debug!(?command, "Forwarding command");

        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", e.0, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
