use crate::config::default_rollover_interval_ms;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Segmenting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Milliseconds each segment runs before the next one starts.
    #[serde(default = "default_rollover_interval_ms")]
    pub rollover_interval_ms: u64,
}

impl RecordingConfig {
    /// Rollover interval as a `Duration`.
    pub fn rollover_interval(&self) -> Duration {
        Duration::from_millis(self.rollover_interval_ms)
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            rollover_interval_ms: default_rollover_interval_ms(),
        }
    }
}
