use crate::{
    CoreResult,
    platform::{SegmentTarget, SurfaceHandle},
    recorder::RecordingProfile,
};

use async_trait::async_trait;

/// Everything a recorder needs to prepare one segment.
#[derive(Debug, Clone, Copy)]
pub struct RecorderSetup<'a> {
    /// Static encoder configuration.
    pub profile: &'a RecordingProfile,
    /// Device id of the unlocked camera to record from.
    pub camera_device: &'a str,
    /// Storage entry the segment is written to.
    pub output: &'a SegmentTarget,
    /// Surface the recorder keeps the preview on, if any.
    pub preview: Option<&'a SurfaceHandle>,
}

/// A reusable audio/video recorder.
///
/// The lifecycle per segment is `prepare -> start -> stop -> reset`. After
/// `reset` the recorder may be prepared again.
#[async_trait]
pub trait MediaRecorder: Send {
    /// Configure sources, encoders and the output target.
    fn prepare(&mut self, setup: RecorderSetup<'_>) -> CoreResult<()>;

    /// Begin capturing into the prepared output.
    fn start(&mut self) -> CoreResult<()>;

    /// Stop capturing and finalize the current output.
    ///
    /// Resolves once the output is complete, so the next segment can be
    /// prepared against the same camera.
    async fn stop(&mut self) -> CoreResult<()>;

    /// Return to the unconfigured state. Must not fail.
    fn reset(&mut self);
}
