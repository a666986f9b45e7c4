use crate::config::{default_camera_device, default_camera_format};

use serde::{Deserialize, Serialize};

/// Camera device configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Device passed to ffmpeg (`/dev/video0`, an avfoundation index, a dshow name).
    #[serde(default = "default_camera_device")]
    pub device: String,

    /// ffmpeg input format for the camera (`v4l2`, `avfoundation`, `dshow`).
    #[serde(default = "default_camera_format")]
    pub input_format: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: default_camera_device(),
            input_format: default_camera_format(),
        }
    }
}
