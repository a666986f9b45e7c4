//! Camera handles for ffmpeg-captured devices.
//!
//! ffmpeg opens the device itself when a segment starts, so a handle here
//! tracks ownership and preview state rather than holding an OS resource.

use crate::config::CameraConfig;

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use segcam_core::{
    CoreError, CoreResult,
    platform::{CameraHandle, CameraService, PreviewSettings, SurfaceHandle},
};
use tracing::{debug, info, instrument, warn};

/// Whether the configured camera device can be found.
///
/// Only `v4l2` devices are file paths that can be checked up front; other
/// input formats are resolved by ffmpeg when recording starts.
pub(crate) fn device_present(config: &CameraConfig) -> bool {
    config.input_format != "v4l2" || Path::new(&config.device).exists()
}

/// Opens the single configured camera.
pub(crate) struct DeviceCameraService {
    config: CameraConfig,
}

impl DeviceCameraService {
    pub(crate) fn new(config: CameraConfig) -> Self {
        Self { config }
    }
}

impl CameraService for DeviceCameraService {
    #[track_caller]
    #[instrument(skip(self), fields(device = %self.config.device))]
    fn open(&mut self) -> CoreResult<Box<dyn CameraHandle>> {
        if !device_present(&self.config) {
            return Err(CoreError::CameraUnavailable {
                reason: format!("Camera device {} not found", self.config.device),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Camera opened");
        Ok(Box::new(DeviceCamera::new(self.config.device.clone())))
    }
}

/// A camera handle for an ffmpeg-captured device.
#[derive(Debug)]
pub(crate) struct DeviceCamera {
    device: String,
    orientation_degrees: u32,
    surface: Option<SurfaceHandle>,
    settings: Option<PreviewSettings>,
    previewing: bool,
    unlocked: bool,
}

impl DeviceCamera {
    pub(crate) fn new(device: String) -> Self {
        Self {
            device,
            orientation_degrees: 0,
            surface: None,
            settings: None,
            previewing: false,
            unlocked: false,
        }
    }
}

impl CameraHandle for DeviceCamera {
    fn device(&self) -> &str {
        &self.device
    }

    fn set_display_orientation(&mut self, degrees: u32) -> CoreResult<()> {
        self.orientation_degrees = degrees % 360;
        Ok(())
    }

    fn set_preview_display(&mut self, surface: &SurfaceHandle) -> CoreResult<()> {
        self.surface = Some(surface.clone());
        Ok(())
    }

    #[track_caller]
    fn apply_settings(&mut self, settings: &PreviewSettings) -> CoreResult<()> {
        if settings.width == 0 || settings.height == 0 {
            return Err(CoreError::CameraConfiguration {
                reason: format!(
                    "Invalid preview size {}x{}",
                    settings.width, settings.height
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.settings = Some(*settings);
        Ok(())
    }

    #[track_caller]
    fn start_preview(&mut self) -> CoreResult<()> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| CoreError::CameraConfiguration {
                reason: "Preview started without a surface".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.previewing = true;
        debug!(
            device = %self.device,
            surface_id = surface.id(),
            orientation = self.orientation_degrees,
            settings = ?self.settings,
            "Preview running"
        );
        Ok(())
    }

    fn stop_preview(&mut self) {
        if self.unlocked {
            warn!(device = %self.device, "Stopping preview while the recorder holds the camera");
        }
        self.previewing = false;
    }

    #[track_caller]
    fn unlock(&mut self) -> CoreResult<()> {
        if !self.previewing {
            return Err(CoreError::CameraUnavailable {
                reason: "Camera unlocked before its preview started".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.unlocked = true;
        Ok(())
    }

    fn lock(&mut self) -> CoreResult<()> {
        self.unlocked = false;
        Ok(())
    }

    fn release(self: Box<Self>) {
        info!(device = %self.device, "Camera device released");
    }
}
