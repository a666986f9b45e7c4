use crate::{AppCommand, AppResult, input_handler::INITIAL_SURFACE_ID};

use segcam_core::{PlatformCallbacks, RecordingController, platform::SurfaceHandle};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument};

/// Main application state.
///
/// Owns the recording controller and serializes every event into it:
/// commands from the input handler and the controller's own timers share
/// one `select!`, so handlers never overlap.
pub struct App {
    pub(crate) controller: RecordingController,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("segcam starting");

        self.controller
            .on_surface_ready(SurfaceHandle::new(INITIAL_SURFACE_ID));

        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    let Some(command) = command else {
                        info!("Command channel closed, shutting down");
                        break;
                    };

                    match self.handle_command(command).await {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => error!(error = ?e, "Failed to handle command"),
                    }
                }

                event = self.controller.next_timer() => {
                    if let Err(e) = self.controller.on_timer(event).await {
                        error!(?event, error = ?e, "Recording ended by a failed segment switch");
                    }
                }
            }
        }

        self.controller.shutdown().await;

        let _ = self.shutdown_tx.send(true);
        info!("segcam shut down successfully");

        Ok(())
    }

    /// Apply one command to the controller.
    ///
    /// Returns `Ok(false)` once shutdown was requested.
    #[instrument(skip(self))]
    pub(crate) async fn handle_command(&mut self, command: AppCommand) -> AppResult<bool> {
        match command {
            AppCommand::Tap => self.controller.on_tap().await?,
            AppCommand::SurfaceCreated { id } => {
                self.controller.on_surface_ready(SurfaceHandle::new(id))
            }
            AppCommand::SurfaceDestroyed => self.controller.on_surface_gone().await,
            AppCommand::PermissionResult(grant) => self.controller.on_permission_result(&grant),
            AppCommand::Shutdown => {
                info!("Shutdown requested");
                return Ok(false);
            }
        }

        Ok(true)
    }
}
