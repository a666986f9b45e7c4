use crate::config::{default_audio_device, default_audio_format};

use serde::{Deserialize, Serialize};

/// Microphone configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Device passed to ffmpeg.
    #[serde(default = "default_audio_device")]
    pub device: String,

    /// ffmpeg input format for the microphone (`pulse`, `alsa`, ...).
    ///
    /// Ignored when the camera format muxes audio itself (avfoundation, dshow).
    #[serde(default = "default_audio_format")]
    pub input_format: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            device: default_audio_device(),
            input_format: default_audio_format(),
        }
    }
}
