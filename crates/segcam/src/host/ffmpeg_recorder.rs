//! Media recorder backed by an `ffmpeg` child process.
//!
//! One process records one segment. `stop` asks ffmpeg to quit through its
//! stdin so the MPEG-4 trailer is written, then awaits the exit without
//! holding up the event loop.

use crate::config::{AudioConfig, CameraConfig, FfmpegConfig};

use std::{panic::Location, process::Stdio, time::Duration};

use async_trait::async_trait;
use error_location::ErrorLocation;
use segcam_core::{
    CoreError, CoreResult,
    platform::{MediaRecorder, RecorderSetup},
    recorder::{AudioEncoder, OutputFormat, VideoEncoder},
};
use tokio::{
    io::AsyncWriteExt,
    process::{Child, Command},
};
use tracing::{debug, info, instrument, warn};

/// Build the ffmpeg argument list for one segment.
///
/// Formats that capture audio and video through a single device
/// (`avfoundation`, `dshow`) get one combined input; everything else gets a
/// camera input followed by a microphone input.
pub(crate) fn build_args(
    setup: &RecorderSetup<'_>,
    camera: &CameraConfig,
    audio: &AudioConfig,
) -> Vec<String> {
    let profile = setup.profile;
    let frame_size = format!("{}x{}", profile.video_width, profile.video_height);
    let frame_rate = profile.video_frame_rate.to_string();

    let mut args: Vec<String> = vec!["-hide_banner".into(), "-loglevel".into(), "error".into()];

    args.extend([
        "-f".into(),
        camera.input_format.clone(),
        "-framerate".into(),
        frame_rate.clone(),
        "-video_size".into(),
        frame_size.clone(),
    ]);

    match camera.input_format.as_str() {
        "avfoundation" => {
            args.extend(["-i".into(), format!("{}:{}", setup.camera_device, audio.device)]);
        }
        "dshow" => {
            args.extend([
                "-i".into(),
                format!("video={}:audio={}", setup.camera_device, audio.device),
            ]);
        }
        _ => {
            args.extend(["-i".into(), setup.camera_device.to_string()]);
            args.extend([
                "-f".into(),
                audio.input_format.clone(),
                "-i".into(),
                audio.device.clone(),
            ]);
        }
    }

    let video_codec = match profile.video_encoder {
        VideoEncoder::H264 => "libx264",
    };
    let audio_codec = match profile.audio_encoder {
        AudioEncoder::Aac => "aac",
    };
    let container = match profile.output_format {
        OutputFormat::Mpeg4 => "mp4",
    };

    args.extend([
        "-c:v".into(),
        video_codec.into(),
        "-b:v".into(),
        profile.video_bitrate.to_string(),
        "-r".into(),
        frame_rate,
        "-s".into(),
        frame_size,
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-c:a".into(),
        audio_codec.into(),
        "-b:a".into(),
        profile.audio_bitrate.to_string(),
        "-ar".into(),
        profile.audio_sampling_rate.to_string(),
        "-f".into(),
        container.into(),
        "-y".into(),
        setup.output.path.to_string_lossy().into_owned(),
    ]);

    args
}

/// Records segments by running ffmpeg against the configured devices.
pub(crate) struct FfmpegRecorder {
    binary: String,
    finalize_timeout: Duration,
    camera: CameraConfig,
    audio: AudioConfig,
    prepared: Option<Vec<String>>,
    child: Option<Child>,
}

impl FfmpegRecorder {
    pub(crate) fn new(ffmpeg: &FfmpegConfig, camera: CameraConfig, audio: AudioConfig) -> Self {
        Self {
            binary: ffmpeg.binary.clone(),
            finalize_timeout: ffmpeg.finalize_timeout(),
            camera,
            audio,
            prepared: None,
            child: None,
        }
    }

    fn kill_child(&mut self) {
        if let Some(mut child) = self.child.take() {
            // The runtime reaps the process once it exits.
            if let Err(e) = child.start_kill() {
                debug!(error = ?e, "ffmpeg already exited");
            }
        }
    }
}

#[async_trait]
impl MediaRecorder for FfmpegRecorder {
    #[track_caller]
    #[instrument(skip(self, setup), fields(output = ?setup.output.path))]
    fn prepare(&mut self, setup: RecorderSetup<'_>) -> CoreResult<()> {
        if self.child.is_some() {
            return Err(CoreError::RecorderFailed {
                reason: "Recorder prepared while a segment is still running".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let args = build_args(&setup, &self.camera, &self.audio);
        debug!(binary = %self.binary, ?args, "Recorder prepared");
        self.prepared = Some(args);

        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn start(&mut self) -> CoreResult<()> {
        let args = self
            .prepared
            .take()
            .ok_or_else(|| CoreError::RecorderFailed {
                reason: "Recorder started before prepare".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CoreError::RecorderFailed {
                reason: format!("Failed to spawn {}: {}", self.binary, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(pid = ?child.id(), "ffmpeg recording");
        self.child = Some(child);

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stop(&mut self) -> CoreResult<()> {
        let mut child = self.child.take().ok_or_else(|| CoreError::RecorderFailed {
            reason: "Recorder stopped while not running".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Closing stdin after `q` also ends capture on builds that ignore the key.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(b"q").await {
                debug!(error = ?e, "ffmpeg stdin already closed");
            }
        }

        let status = match tokio::time::timeout(self.finalize_timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                return Err(CoreError::RecorderFailed {
                    reason: format!("Failed to wait for ffmpeg: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(_) => {
                warn!(
                    pid = ?child.id(),
                    timeout_ms = self.finalize_timeout.as_millis(),
                    "ffmpeg did not finalize in time, killing"
                );
                if let Err(e) = child.kill().await {
                    debug!(error = ?e, "ffmpeg exited while being killed");
                }
                return Err(CoreError::RecorderFailed {
                    reason: "ffmpeg did not finalize the segment in time".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if !status.success() {
            return Err(CoreError::RecorderFailed {
                reason: format!("ffmpeg exited with {}", status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("ffmpeg finalized segment");
        Ok(())
    }

    fn reset(&mut self) {
        self.prepared = None;
        self.kill_child();
    }
}

impl Drop for FfmpegRecorder {
    fn drop(&mut self) {
        self.kill_child();
    }
}
