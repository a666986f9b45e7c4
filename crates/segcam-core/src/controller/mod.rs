mod elapsed;
mod recording;
mod session;
mod settings;
mod timers;

pub use {
    elapsed::format_elapsed,
    recording::{
        IDLE_TIMER_TEXT, PERMISSIONS_REQUIRED_NOTICE, Platform, RECORDING_FAILED_NOTICE,
        RecordingController, START_LABEL, STOP_LABEL,
    },
    session::{ActiveSession, RecordingState},
    settings::{ControllerSettings, DEFAULT_ROLLOVER_INTERVAL, TICK_INTERVAL},
    timers::{SessionTimers, TimerEvent},
};
