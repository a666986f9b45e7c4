//! Static encoder settings shared by every segment.

use crate::platform::{FocusMode, PreviewSettings};

/// Where audio is captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSource {
    /// The device microphone.
    Microphone,
}

/// Where video is captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSource {
    /// The camera handed over by the controller.
    Camera,
}

/// Output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// MPEG-4 Part 14.
    Mpeg4,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mpeg4 => "mp4",
        }
    }
}

/// Audio codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoder {
    /// Advanced Audio Coding.
    Aac,
}

/// Video codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoEncoder {
    /// H.264 / AVC.
    H264,
}

/// Full recorder configuration for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingProfile {
    /// Audio input.
    pub audio_source: AudioSource,
    /// Video input.
    pub video_source: VideoSource,
    /// Container format.
    pub output_format: OutputFormat,
    /// Audio codec.
    pub audio_encoder: AudioEncoder,
    /// Video codec.
    pub video_encoder: VideoEncoder,
    /// Frame width in pixels.
    pub video_width: u32,
    /// Frame height in pixels.
    pub video_height: u32,
    /// Audio sampling rate in Hz.
    pub audio_sampling_rate: u32,
    /// Target video bitrate in bits per second.
    pub video_bitrate: u32,
    /// Target audio bitrate in bits per second.
    pub audio_bitrate: u32,
    /// Frames per second.
    pub video_frame_rate: u32,
}

/// The profile every segment is recorded with: MPEG-4, AAC + H.264,
/// 1280x720 at 30 fps, 2 Mbps video, 64 kbps audio sampled at 44.1 kHz.
pub const SEGMENT_PROFILE: RecordingProfile = RecordingProfile {
    audio_source: AudioSource::Microphone,
    video_source: VideoSource::Camera,
    output_format: OutputFormat::Mpeg4,
    audio_encoder: AudioEncoder::Aac,
    video_encoder: VideoEncoder::H264,
    video_width: 1280,
    video_height: 720,
    audio_sampling_rate: 44_100,
    video_bitrate: 2 * 1024 * 1024,
    audio_bitrate: 64_000,
    video_frame_rate: 30,
};

/// Preview configuration matching [`SEGMENT_PROFILE`]'s frame size.
pub const PREVIEW_SETTINGS: PreviewSettings = PreviewSettings {
    orientation_degrees: 90,
    focus_mode: FocusMode::ContinuousVideo,
    width: 1280,
    height: 720,
};
