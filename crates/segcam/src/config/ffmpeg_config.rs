use crate::config::{default_ffmpeg_binary, default_finalize_timeout_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Encoder process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfmpegConfig {
    /// ffmpeg executable name or path.
    #[serde(default = "default_ffmpeg_binary")]
    pub binary: String,

    /// How long a segment may take to finalize before ffmpeg is killed.
    #[serde(default = "default_finalize_timeout_ms")]
    pub finalize_timeout_ms: u64,
}

impl FfmpegConfig {
    /// Finalize timeout as a `Duration`.
    pub fn finalize_timeout(&self) -> Duration {
        Duration::from_millis(self.finalize_timeout_ms)
    }
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            binary: default_ffmpeg_binary(),
            finalize_timeout_ms: default_finalize_timeout_ms(),
        }
    }
}
