//! segcam core library
//!
//! Platform-neutral control logic for a segmented camera recorder: a splash
//! screen, a permission-gated record/stop toggle, fixed-interval segment
//! rollover and an elapsed-time display. Camera, encoder, storage,
//! permission and widget services are reached through the traits in
//! [`platform`].
//!
//! # Example
//!
//! ```no_run
//! use segcam_core::{ControllerSettings, Platform, RecordingController};
//!
//! async fn drive(platform: Platform) -> segcam_core::CoreResult<()> {
//!     let mut controller = RecordingController::new(platform, ControllerSettings::default());
//!
//!     controller.on_tap().await?;
//!     loop {
//!         let event = controller.next_timer().await;
//!         controller.on_timer(event).await?;
//!     }
//! }
//! ```

mod controller;
mod error;
pub mod platform;
pub mod recorder;
mod splash;

pub use {
    controller::{
        ActiveSession, ControllerSettings, DEFAULT_ROLLOVER_INTERVAL, IDLE_TIMER_TEXT,
        PERMISSIONS_REQUIRED_NOTICE, Platform, RECORDING_FAILED_NOTICE, RecordingController,
        RecordingState, START_LABEL, STOP_LABEL, SessionTimers, TICK_INTERVAL, TimerEvent,
        format_elapsed,
    },
    error::{CoreError, Result as CoreResult},
    platform::PlatformCallbacks,
    splash::{SPLASH_DELAY, SplashController, SplashScreen},
};

#[cfg(test)]
mod tests;
