use std::time::Duration;

/// Period of the elapsed-time display refresh.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Default time between segment rollovers (10 minutes).
pub const DEFAULT_ROLLOVER_INTERVAL: Duration = Duration::from_millis(600_000);

/// Timing knobs for the recording controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// How long each segment runs before a new one is started.
    pub rollover_interval: Duration,
    /// How often the elapsed-time label refreshes.
    pub tick_interval: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            rollover_interval: DEFAULT_ROLLOVER_INTERVAL,
            tick_interval: TICK_INTERVAL,
        }
    }
}
