mod audio_config;
mod camera_config;
#[allow(clippy::module_inception)]
mod config;
mod ffmpeg_config;
mod permissions_config;
mod recording_config;
mod storage_config;

pub(crate) use {
    audio_config::AudioConfig, camera_config::CameraConfig, config::Config,
    ffmpeg_config::FfmpegConfig, permissions_config::PermissionsConfig,
    recording_config::RecordingConfig, storage_config::StorageConfig,
};

pub(crate) const DEFAULT_ROLLOVER_INTERVAL_MS: u64 = 600_000;
pub(crate) const MIN_ROLLOVER_INTERVAL_MS: u64 = 1_000;
pub(crate) const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";
pub(crate) const DEFAULT_FINALIZE_TIMEOUT_MS: u64 = 5_000;

#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_CAMERA_DEVICE: &str = "/dev/video0";
#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_CAMERA_FORMAT: &str = "v4l2";
#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_AUDIO_DEVICE: &str = "default";
#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_AUDIO_FORMAT: &str = "pulse";

#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_CAMERA_DEVICE: &str = "0";
#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_CAMERA_FORMAT: &str = "avfoundation";
#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_AUDIO_DEVICE: &str = "0";
#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_AUDIO_FORMAT: &str = "avfoundation";

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_CAMERA_DEVICE: &str = "Integrated Camera";
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_CAMERA_FORMAT: &str = "dshow";
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_AUDIO_DEVICE: &str = "Microphone";
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_AUDIO_FORMAT: &str = "dshow";

pub(crate) fn default_rollover_interval_ms() -> u64 {
    DEFAULT_ROLLOVER_INTERVAL_MS
}

pub(crate) fn default_ffmpeg_binary() -> String {
    DEFAULT_FFMPEG_BINARY.to_string()
}

pub(crate) fn default_finalize_timeout_ms() -> u64 {
    DEFAULT_FINALIZE_TIMEOUT_MS
}

pub(crate) fn default_camera_device() -> String {
    DEFAULT_CAMERA_DEVICE.to_string()
}

pub(crate) fn default_camera_format() -> String {
    DEFAULT_CAMERA_FORMAT.to_string()
}

pub(crate) fn default_audio_device() -> String {
    DEFAULT_AUDIO_DEVICE.to_string()
}

pub(crate) fn default_audio_format() -> String {
    DEFAULT_AUDIO_FORMAT.to_string()
}

pub(crate) fn default_granted() -> bool {
    true
}
