use crate::{CoreResult, platform::SurfaceHandle};

/// Camera focus behaviour requested for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Continuous autofocus tuned for video capture.
    ContinuousVideo,
}

/// Preview configuration applied when a camera is bound to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSettings {
    /// Clockwise display rotation in degrees.
    pub orientation_degrees: u32,
    /// Focus behaviour.
    pub focus_mode: FocusMode,
    /// Preview width in pixels.
    pub width: u32,
    /// Preview height in pixels.
    pub height: u32,
}

/// Source of camera handles.
pub trait CameraService: Send {
    /// Acquire exclusive access to the default camera.
    fn open(&mut self) -> CoreResult<Box<dyn CameraHandle>>;
}

/// An acquired camera device.
///
/// A handle is single-owner. Dropping the `Box` without calling
/// [`CameraHandle::release`] leaks the device on platforms that track
/// exclusive ownership, so the controller always releases explicitly.
pub trait CameraHandle: Send {
    /// Device identifier the recorder uses to reach the same camera.
    fn device(&self) -> &str;

    /// Rotate the preview output.
    fn set_display_orientation(&mut self, degrees: u32) -> CoreResult<()>;

    /// Route preview frames to `surface`.
    fn set_preview_display(&mut self, surface: &SurfaceHandle) -> CoreResult<()>;

    /// Apply focus mode and preview size.
    fn apply_settings(&mut self, settings: &PreviewSettings) -> CoreResult<()>;

    /// Start streaming preview frames.
    fn start_preview(&mut self) -> CoreResult<()>;

    /// Stop streaming preview frames. No-op if the preview is not running.
    fn stop_preview(&mut self);

    /// Hand the device over to the media recorder.
    fn unlock(&mut self) -> CoreResult<()>;

    /// Take the device back from the media recorder.
    fn lock(&mut self) -> CoreResult<()>;

    /// Give the device back to the system.
    fn release(self: Box<Self>);
}
