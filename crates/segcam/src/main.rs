//! segcam: camera recorder that splits its output into fixed-length segments.

mod app;
mod app_command;
mod config;
mod error;
mod host;
mod input_handler;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    input_handler::InputHandler,
};

use crate::{
    config::Config,
    host::{
        DeviceCameraService, FfmpegRecorder, FsSegmentStore, PolicyPermissions, TerminalSplash,
        TerminalView,
    },
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use segcam_core::{Platform, RecordingController, SplashController};
use tokio::{
    runtime::Runtime,
    sync::{mpsc, watch},
};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "segcam=debug,segcam_core=debug";
const LOG_FILE_NAME: &str = "segcam.log";
const COMMAND_CHANNEL_CAPACITY: usize = 32;
const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Application entry point.
fn main() {
    // Flushes the log file when dropped.
    let _log_guard = init_tracing();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    let runtime = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(config)) {
        error!(error = ?e, "segcam failed");
    }

    // The stdin reader may still be blocked in a read.
    runtime.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
}

/// Console output plus a daily JSON log file when a data directory exists.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match Config::log_dir() {
        Some(log_dir) => {
            let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

/// Single-threaded runtime: the controller is only ever touched from one task.
#[track_caller]
fn build_runtime() -> AppResult<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::RuntimeError {
            reason: format!("Failed to build runtime: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

async fn run(config: Config) -> AppResult<()> {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let storage_root = config.storage.resolve_root()?;
    info!(storage_root = ?storage_root, "Segments will be stored under root");

    let platform = Platform {
        camera: Box::new(DeviceCameraService::new(config.camera.clone())),
        recorder: Box::new(FfmpegRecorder::new(
            &config.ffmpeg,
            config.camera.clone(),
            config.audio.clone(),
        )),
        store: Box::new(FsSegmentStore::new(storage_root.clone())),
        permissions: Box::new(PolicyPermissions::new(
            config.permissions.clone(),
            storage_root,
            command_tx.clone(),
        )),
        view: Box::new(TerminalView::new()),
    };
    let settings = config.controller_settings();

    let controller = SplashController::new(TerminalSplash)
        .run(|| RecordingController::new(platform, settings))
        .await;

    let app = App {
        controller,
        command_rx,
        shutdown_tx,
    };
    let input_handler = InputHandler::new(command_tx);

    tokio::join!(
        async {
            if let Err(e) = input_handler.run(shutdown_rx).await {
                error!(error = ?e, "Input handler error");
            }
        },
        async {
            if let Err(e) = app.run().await {
                error!(error = ?e, "App error");
            }
        }
    );

    Ok(())
}
