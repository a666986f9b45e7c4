//! Recording controller with permission gate and segment rollover.
//!
//! Owns the camera handle, the recorder and the session state. Every entry
//! point (taps, timer fires, surface and permission callbacks) must be
//! called from one event loop; nothing here is shared across threads.

use crate::{
    CoreError, CoreResult,
    controller::{
        ActiveSession, ControllerSettings, RecordingState, SessionTimers, TimerEvent,
        format_elapsed,
    },
    platform::{
        CameraHandle, CameraService, Capability, MediaRecorder, PermissionGrant,
        PermissionService, PlatformCallbacks, RecorderSetup, RecordingView, SegmentEntry,
        SegmentStore, SegmentTarget, SurfaceHandle,
    },
    recorder::{PREVIEW_SETTINGS, SEGMENT_PROFILE},
};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Button caption while idle.
pub const START_LABEL: &str = "Start Recording";

/// Button caption while recording.
pub const STOP_LABEL: &str = "Stop Recording";

/// Timer label while idle.
pub const IDLE_TIMER_TEXT: &str = "Click to Record";

/// Notice shown when a permission request is denied.
pub const PERMISSIONS_REQUIRED_NOTICE: &str = "Permissions required";

/// Notice shown when a session could not be started or continued.
pub const RECORDING_FAILED_NOTICE: &str = "Recording failed";

/// The host services a controller runs against.
pub struct Platform {
    /// Camera acquisition.
    pub camera: Box<dyn CameraService>,
    /// Audio/video recorder, reused across segments.
    pub recorder: Box<dyn MediaRecorder>,
    /// Media storage segments are created in.
    pub store: Box<dyn SegmentStore>,
    /// Runtime permission checks.
    pub permissions: Box<dyn PermissionService>,
    /// Button, timer label and notices.
    pub view: Box<dyn RecordingView>,
}

/// Drives the camera, recorder and timers of the recording screen.
///
/// Construct it when the screen activates and call
/// [`shutdown`](Self::shutdown) before letting it go. Dropping a controller
/// that is still recording abandons the current segment without finalizing
/// it, then releases the camera.
pub struct RecordingController {
    platform: Platform,
    settings: ControllerSettings,
    camera: Option<Box<dyn CameraHandle>>,
    surface: Option<SurfaceHandle>,
    state: RecordingState,
    timers: SessionTimers,
}

impl RecordingController {
    /// Create an idle controller and reset the view to its idle captions.
    pub fn new(platform: Platform, settings: ControllerSettings) -> Self {
        let mut controller = Self {
            platform,
            settings,
            camera: None,
            surface: None,
            state: RecordingState::Idle,
            timers: SessionTimers::default(),
        };
        controller.show_idle();

        info!(
            rollover_ms = settings.rollover_interval.as_millis(),
            tick_ms = settings.tick_interval.as_millis(),
            "RecordingController initialized"
        );

        controller
    }

    /// Current recording state.
    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    /// Whether a session is in progress.
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// Whether a camera handle is currently held.
    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    /// Whether the session timers are armed.
    pub fn timers_armed(&self) -> bool {
        self.timers.is_armed()
    }

    /// Handle a tap on the record button.
    ///
    /// Stops a running session, or starts one when all capabilities are
    /// granted. With any capability missing, requests all of them and stays
    /// idle.
    ///
    /// # Errors
    ///
    /// Returns the failure that prevented a session from starting. The
    /// controller is back in [`RecordingState::Idle`] when this happens.
    #[instrument(skip(self))]
    pub async fn on_tap(&mut self) -> CoreResult<()> {
        if self.is_recording() {
            self.stop_recording().await;
            return Ok(());
        }

        if !self.permissions_granted() {
            info!("Capabilities missing, requesting permissions");
            self.platform.permissions.request(&Capability::REQUIRED);
            return Ok(());
        }

        self.bind_preview();
        self.start_recording()
    }

    /// Wait for the next armed timer.
    ///
    /// Pending forever while idle. Pass the result to
    /// [`on_timer`](Self::on_timer). Cancel safe, so it can sit in a
    /// `select!` next to other event sources.
    pub async fn next_timer(&mut self) -> TimerEvent {
        self.timers.fired().await
    }

    /// Handle a fired timer.
    ///
    /// # Errors
    ///
    /// Returns the failure that ended the session during a rollover.
    #[instrument(skip(self))]
    pub async fn on_timer(&mut self, event: TimerEvent) -> CoreResult<()> {
        match event {
            TimerEvent::Tick => {
                self.refresh_elapsed();
                Ok(())
            }
            TimerEvent::Rollover => self.rollover().await,
        }
    }

    /// Finalize any running session and release the camera.
    ///
    /// Safe to call repeatedly.
    #[instrument(skip(self))]
    pub async fn shutdown(&mut self) {
        if self.is_recording() {
            self.stop_recording().await;
        }
        self.release_camera();
    }

    fn permissions_granted(&self) -> bool {
        Capability::REQUIRED
            .iter()
            .all(|capability| self.platform.permissions.is_granted(*capability))
    }

    /// Acquire the camera and start its preview unless one is already held.
    ///
    /// Failures are logged and leave no camera held.
    #[instrument(skip(self))]
    fn bind_preview(&mut self) {
        if self.camera.is_some() {
            debug!("Camera already bound");
            return;
        }

        let mut camera = match self.platform.camera.open() {
            Ok(camera) => camera,
            Err(e) => {
                error!(error = ?e, "Failed to open camera");
                return;
            }
        };

        match Self::configure_preview(camera.as_mut(), self.surface.as_ref()) {
            Ok(()) => {
                info!(device = camera.device(), "Camera preview started");
                self.camera = Some(camera);
            }
            Err(e) => {
                error!(error = ?e, "Error setting camera preview");
                camera.release();
            }
        }
    }

    #[track_caller]
    fn configure_preview(
        camera: &mut dyn CameraHandle,
        surface: Option<&SurfaceHandle>,
    ) -> CoreResult<()> {
        camera.set_display_orientation(PREVIEW_SETTINGS.orientation_degrees)?;

        let surface = surface.ok_or_else(|| CoreError::CameraConfiguration {
            reason: "No preview surface available".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        camera.set_preview_display(surface)?;
        camera.apply_settings(&PREVIEW_SETTINGS)?;
        camera.start_preview()
    }

    #[instrument(skip(self))]
    fn start_recording(&mut self) -> CoreResult<()> {
        let segment = match self.begin_segment() {
            Ok(segment) => segment,
            Err(e) => {
                self.abort_session();
                return Err(e);
            }
        };

        let session = ActiveSession {
            session_id: Uuid::new_v4(),
            started_at: Instant::now(),
            segment_index: 1,
            current_segment: segment,
        };

        info!(
            session_id = %session.session_id,
            uri = %session.current_segment.uri,
            "Recording started"
        );

        self.state = RecordingState::Recording(session);
        self.timers
            .arm(self.settings.tick_interval, self.settings.rollover_interval);

        self.platform.view.set_button_label(STOP_LABEL);
        self.refresh_elapsed();

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stop_recording(&mut self) {
        let RecordingState::Recording(session) = std::mem::take(&mut self.state) else {
            return;
        };

        self.timers.disarm();
        self.show_idle();

        match self.platform.recorder.stop().await {
            Ok(()) => debug!(uri = %session.current_segment.uri, "Segment finalized"),
            Err(e) => error!(error = ?e, "Error stopping recorder"),
        }
        self.release_recorder();

        info!(
            session_id = %session.session_id,
            duration_ms = session.started_at.elapsed().as_millis(),
            segments = session.segment_index,
            "Recording stopped"
        );
    }

    #[instrument(skip(self))]
    async fn rollover(&mut self) -> CoreResult<()> {
        if !self.is_recording() {
            return Ok(());
        }

        if let Err(e) = self.platform.recorder.stop().await {
            error!(error = ?e, "Error stopping recorder during switch");
        }
        self.platform.recorder.reset();

        let segment = match self.begin_segment() {
            Ok(segment) => segment,
            Err(e) => {
                self.abort_session();
                return Err(e);
            }
        };

        if let RecordingState::Recording(session) = &mut self.state {
            session.segment_index += 1;
            session.current_segment = segment;
            info!(
                session_id = %session.session_id,
                segment_index = session.segment_index,
                uri = %session.current_segment.uri,
                "Switched to new segment"
            );
        }
        self.timers.rearm_rollover();

        Ok(())
    }

    /// Create a storage entry and get the recorder running against it.
    #[track_caller]
    fn begin_segment(&mut self) -> CoreResult<SegmentTarget> {
        let camera = self
            .camera
            .as_mut()
            .ok_or_else(|| CoreError::RecorderFailed {
                reason: "No camera bound".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        camera.unlock()?;

        let entry = SegmentEntry::now();
        let target = self.platform.store.create(&entry)?;
        debug!(uri = %target.uri, path = ?target.path, "Segment entry created");

        self.platform.recorder.prepare(RecorderSetup {
            profile: &SEGMENT_PROFILE,
            camera_device: camera.device(),
            output: &target,
            preview: self.surface.as_ref(),
        })?;
        self.platform.recorder.start()?;

        Ok(target)
    }

    /// Return to idle after a session failed to start or continue.
    fn abort_session(&mut self) {
        self.state = RecordingState::Idle;
        self.timers.disarm();
        self.release_recorder();
        self.show_idle();
        self.platform.view.show_notice(RECORDING_FAILED_NOTICE);
        warn!("Session aborted, back to idle");
    }

    /// Reset the recorder and give the camera back from it.
    fn release_recorder(&mut self) {
        self.platform.recorder.reset();
        if let Some(camera) = self.camera.as_mut() {
            if let Err(e) = camera.lock() {
                warn!(error = ?e, "Failed to lock camera");
            }
        }
    }

    fn release_camera(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            camera.stop_preview();
            camera.release();
            info!("Camera released");
        }
    }

    fn refresh_elapsed(&mut self) {
        if let Some(session) = self.state.session() {
            let text = format_elapsed(session.started_at.elapsed());
            self.platform.view.set_timer_text(&text);
        }
    }

    fn show_idle(&mut self) {
        self.platform.view.set_button_label(START_LABEL);
        self.platform.view.set_timer_text(IDLE_TIMER_TEXT);
    }
}

#[async_trait]
impl PlatformCallbacks for RecordingController {
    #[instrument(skip(self))]
    fn on_surface_ready(&mut self, surface: SurfaceHandle) {
        debug!(surface_id = surface.id(), "Preview surface ready");
        self.surface = Some(surface);
    }

    #[instrument(skip(self))]
    async fn on_surface_gone(&mut self) {
        if self.is_recording() {
            warn!("Preview surface destroyed while recording, stopping session");
            self.stop_recording().await;
        }
        self.release_camera();
        self.surface = None;
    }

    #[instrument(skip(self))]
    fn on_permission_result(&mut self, grant: &PermissionGrant) {
        if grant.all_granted() {
            info!("All permissions granted");
            self.bind_preview();
        } else {
            let missing = grant.missing();
            warn!(?missing, "Permissions denied");
            self.platform.view.show_notice(PERMISSIONS_REQUIRED_NOTICE);
        }
    }
}

impl Drop for RecordingController {
    fn drop(&mut self) {
        if let RecordingState::Recording(session) = std::mem::take(&mut self.state) {
            warn!(
                session_id = %session.session_id,
                uri = %session.current_segment.uri,
                "Controller dropped while recording, segment abandoned"
            );
            self.timers.disarm();
            self.release_recorder();
        }
        self.release_camera();
    }
}
