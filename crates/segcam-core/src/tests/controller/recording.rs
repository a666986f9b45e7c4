use crate::{
    ControllerSettings, CoreError, IDLE_TIMER_TEXT, PERMISSIONS_REQUIRED_NOTICE, PlatformCallbacks,
    RECORDING_FAILED_NOTICE, RecordingState, START_LABEL, STOP_LABEL, TimerEvent,
    platform::{Capability, PermissionGrant, SEGMENT_RELATIVE_PATH},
    recorder::PREVIEW_SETTINGS,
    tests::fakes::{CAMERA_DEVICE, Call, Harness},
};

use std::time::Duration;

use tokio::time::{Instant, timeout};

fn short_rollover() -> ControllerSettings {
    ControllerSettings {
        rollover_interval: Duration::from_secs(10),
        ..ControllerSettings::default()
    }
}

/// WHAT: A tap with every permission granted binds the preview and starts segment #1
/// WHY: The happy path must configure the camera before handing it to the recorder
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_all_permissions_when_tapping_then_preview_binds_and_first_segment_starts() {
    // Given: A controller with a surface and all permissions granted
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.clear();

    // When: The record button is tapped
    controller.on_tap().await.unwrap();

    // Then: Camera is configured, a segment is created and the recorder runs
    let calls = harness.calls();
    let expected_prefix = [
        Call::CameraOpened,
        Call::Orientation(90),
        Call::PreviewDisplay(7),
        Call::Settings(PREVIEW_SETTINGS),
        Call::PreviewStarted,
        Call::CameraUnlocked,
    ];
    assert_eq!(&calls[..expected_prefix.len()], &expected_prefix);
    assert!(matches!(calls[expected_prefix.len()], Call::SegmentCreated(ref name)
        if name.starts_with("video_") && name.ends_with(".mp4")));
    assert!(matches!(calls[expected_prefix.len() + 1], Call::RecorderPrepared { ref device, .. }
        if device == CAMERA_DEVICE));
    assert_eq!(calls[expected_prefix.len() + 2], Call::RecorderStarted);

    let session = controller.state().session().unwrap();
    assert_eq!(session.segment_index, 1);
    assert!(session.current_segment.path.starts_with(SEGMENT_RELATIVE_PATH));
    assert!(controller.timers_armed());
    assert_eq!(harness.last_button_label().as_deref(), Some(STOP_LABEL));
    assert_eq!(harness.last_timer_text().as_deref(), Some("00:00:00"));
}

/// WHAT: Ticker shows 00:00:01 after one second and stops after tap-to-stop
/// WHY: Display must track elapsed time and never update once idle
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_recording_when_ticking_then_display_tracks_elapsed_and_freezes_after_stop() {
    // Given: Recording started at t=0
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    let started = Instant::now();
    controller.on_tap().await.unwrap();

    // When: The first tick fires
    let event = controller.next_timer().await;
    controller.on_timer(event).await.unwrap();

    // Then: One second has passed and the label shows it
    assert_eq!(event, TimerEvent::Tick);
    assert_eq!(started.elapsed(), Duration::from_secs(1));
    assert_eq!(harness.last_timer_text().as_deref(), Some("00:00:01"));

    // When: Ticks continue to t=5s, then the user taps stop
    for _ in 0..4 {
        let event = controller.next_timer().await;
        controller.on_timer(event).await.unwrap();
    }
    assert_eq!(harness.last_timer_text().as_deref(), Some("00:00:05"));
    harness.clear();
    controller.on_tap().await.unwrap();

    // Then: Recorder finalized and reset, camera locked, display reset
    let calls = harness.calls();
    assert!(calls.contains(&Call::RecorderStopped));
    assert!(calls.contains(&Call::RecorderReset));
    assert!(calls.contains(&Call::CameraLocked));
    assert_eq!(controller.state(), &RecordingState::Idle);
    assert_eq!(harness.last_timer_text().as_deref(), Some(IDLE_TIMER_TEXT));
    assert_eq!(harness.last_button_label().as_deref(), Some(START_LABEL));

    // Then: No timer can fire any more
    assert!(!controller.timers_armed());
    let stale = timeout(Duration::from_secs(30), controller.next_timer()).await;
    assert!(stale.is_err());
}

/// WHAT: Taps alternate strictly between Idle and Recording
/// WHY: Two taps must never double-start or double-stop the recorder
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_repeated_taps_when_toggling_then_state_alternates_and_recorder_balanced() {
    // Given: An idle controller
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());

    // When: Tapping six times
    let mut observed = Vec::new();
    for _ in 0..6 {
        controller.on_tap().await.unwrap();
        observed.push(controller.is_recording());
    }

    // Then: States alternate and starts match stops
    assert_eq!(observed, vec![true, false, true, false, true, false]);
    assert_eq!(harness.count(&Call::RecorderStarted), 3);
    assert_eq!(harness.count(&Call::RecorderStopped), 3);
    assert_eq!(harness.count(&Call::CameraOpened), 1);
}

/// WHAT: Stopping leaves the controller ready to start again immediately
/// WHY: Recorder reset and camera lock must happen on every stop
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_stopped_session_when_tapping_again_then_new_session_starts_on_same_camera() {
    // Given: A session that was started and stopped
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_tap().await.unwrap();
    let first_id = controller.state().session().unwrap().session_id;
    controller.on_tap().await.unwrap();
    harness.clear();

    // When: Tapping again right away
    controller.on_tap().await.unwrap();

    // Then: A fresh session runs without reopening the camera
    let session = controller.state().session().unwrap();
    assert_ne!(session.session_id, first_id);
    assert_eq!(session.segment_index, 1);
    assert_eq!(harness.count(&Call::CameraOpened), 0);
    assert_eq!(harness.count(&Call::RecorderStarted), 1);
}

/// WHAT: A stop failure on tap still resets the recorder and unlocks the camera
/// WHY: Cleanup is guaranteed regardless of finalize errors
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_failing_finalize_when_stopping_then_cleanup_still_runs() {
    // Given: A running session whose recorder fails to stop
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_tap().await.unwrap();
    harness.knobs(|k| k.fail_stop = true);
    harness.clear();

    // When: Tapping stop
    let result = controller.on_tap().await;

    // Then: Tap succeeds, recorder reset, camera locked, idle
    assert!(result.is_ok());
    assert_eq!(
        harness.calls()[..],
        [
            Call::Button(START_LABEL.to_string()),
            Call::Timer(IDLE_TIMER_TEXT.to_string()),
            Call::RecorderStopped,
            Call::RecorderReset,
            Call::CameraLocked,
        ]
    );
    assert!(!controller.is_recording());
}

/// WHAT: Rollover fires at the configured interval with one full restart cycle
/// WHY: Each segment must be finalized before the next one starts
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_recording_when_interval_elapses_then_exactly_one_rollover_cycle_runs() {
    // Given: Recording with a 10s rollover interval
    let harness = Harness::new();
    let mut controller = harness.controller(short_rollover());
    let started = Instant::now();
    controller.on_tap().await.unwrap();
    let first_uri = controller.state().session().unwrap().current_segment.uri.clone();

    // When: Timers run until the first rollover
    let mut ticks = 0;
    loop {
        let event = controller.next_timer().await;
        if event == TimerEvent::Rollover {
            break;
        }
        ticks += 1;
        controller.on_timer(event).await.unwrap();
    }
    assert_eq!(started.elapsed(), Duration::from_secs(10));
    assert_eq!(ticks, 9);
    harness.clear();
    controller.on_timer(TimerEvent::Rollover).await.unwrap();

    // Then: stop, reset, unlock, create, prepare, start, in that order, once
    let calls = harness.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[0], Call::RecorderStopped);
    assert_eq!(calls[1], Call::RecorderReset);
    assert_eq!(calls[2], Call::CameraUnlocked);
    assert!(matches!(calls[3], Call::SegmentCreated(_)));
    assert!(matches!(calls[4], Call::RecorderPrepared { .. }));
    assert_eq!(calls[5], Call::RecorderStarted);

    let session = controller.state().session().unwrap();
    assert_eq!(session.segment_index, 2);
    assert_ne!(session.current_segment.uri, first_uri);
}

/// WHAT: Rollover re-arms itself for as long as the session runs
/// WHY: Segmenting is an unbounded repeating cycle
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_long_session_when_running_then_rollovers_repeat_every_interval() {
    // Given: Recording with a 10s rollover interval
    let harness = Harness::new();
    let mut controller = harness.controller(short_rollover());
    let started = Instant::now();
    controller.on_tap().await.unwrap();

    // When: Running through three rollovers
    let mut rollover_times = Vec::new();
    while rollover_times.len() < 3 {
        let event = controller.next_timer().await;
        if event == TimerEvent::Rollover {
            rollover_times.push(started.elapsed());
        }
        controller.on_timer(event).await.unwrap();
    }

    // Then: Each one lands one interval after the previous
    assert_eq!(
        rollover_times,
        vec![
            Duration::from_secs(10),
            Duration::from_secs(20),
            Duration::from_secs(30)
        ]
    );
    assert_eq!(controller.state().session().unwrap().segment_index, 4);
    assert_eq!(harness.count_created(), 4);
    assert_eq!(harness.last_timer_text().as_deref(), Some("00:00:29"));
}

/// WHAT: A stop failure during rollover is logged and the next segment still starts
/// WHY: Finalize errors are best-effort and must not end the session
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_failing_finalize_when_rolling_over_then_next_segment_starts() {
    // Given: A running session whose recorder fails to stop
    let harness = Harness::new();
    let mut controller = harness.controller(short_rollover());
    controller.on_tap().await.unwrap();
    harness.knobs(|k| k.fail_stop = true);

    // When: Rollover fires
    controller.on_timer(TimerEvent::Rollover).await.unwrap();

    // Then: Reset happened and segment #2 is running
    assert!(harness.calls().contains(&Call::RecorderReset));
    assert_eq!(controller.state().session().unwrap().segment_index, 2);
    assert_eq!(harness.count(&Call::RecorderStarted), 2);
}

/// WHAT: Prepare failure on rollover ends the session
/// WHY: The controller must never claim Recording without a running recorder
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_failing_prepare_when_rolling_over_then_falls_back_to_idle() {
    // Given: A running session whose next prepare will fail
    let harness = Harness::new();
    let mut controller = harness.controller(short_rollover());
    controller.on_tap().await.unwrap();
    harness.knobs(|k| k.fail_prepare = true);

    // When: Rollover fires
    let result = controller.on_timer(TimerEvent::Rollover).await;

    // Then: Error surfaced, idle, timers disarmed, user notified
    assert!(matches!(result, Err(CoreError::RecorderFailed { .. })));
    assert_eq!(controller.state(), &RecordingState::Idle);
    assert!(!controller.timers_armed());
    assert_eq!(harness.notices(), vec![RECORDING_FAILED_NOTICE.to_string()]);
    assert_eq!(harness.last_button_label().as_deref(), Some(START_LABEL));
}

/// WHAT: Prepare failure on start keeps the controller idle
/// WHY: A session must not be reported as recording when the recorder never started
#[tokio::test(start_paused = true)]
async fn given_failing_prepare_when_tapping_then_stays_idle_with_notice() {
    // Given: A recorder that cannot prepare
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.knobs(|k| k.fail_prepare = true);

    // When: Tapping record
    let result = controller.on_tap().await;

    // Then: Error returned, idle, recorder reset, camera given back
    assert!(matches!(result, Err(CoreError::RecorderFailed { .. })));
    assert!(!controller.is_recording());
    assert!(!controller.timers_armed());
    assert_eq!(harness.count(&Call::RecorderStarted), 0);
    assert_eq!(harness.count(&Call::RecorderReset), 1);
    assert_eq!(harness.count(&Call::CameraLocked), 1);
    assert_eq!(harness.notices(), vec![RECORDING_FAILED_NOTICE.to_string()]);
}

/// WHAT: Storage entry creation failure keeps the controller idle
/// WHY: The recorder must never run without an output target
#[tokio::test(start_paused = true)]
async fn given_failing_store_when_tapping_then_no_recorder_is_prepared() {
    // Given: Storage that rejects inserts
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.knobs(|k| k.fail_store = true);

    // When: Tapping record
    let result = controller.on_tap().await;

    // Then: Segment error, no prepare, idle
    assert!(matches!(
        result,
        Err(CoreError::SegmentCreationFailed { .. })
    ));
    assert_eq!(harness.count_prepared(), 0);
    assert!(!controller.is_recording());
}

/// WHAT: Preview binding failure releases the partially acquired camera
/// WHY: A failed bind must leave the pre-acquisition state behind
#[tokio::test(start_paused = true)]
async fn given_failing_preview_when_tapping_then_camera_released_and_idle() {
    // Given: A camera that fails to attach to the surface
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.knobs(|k| k.fail_preview = true);

    // When: Tapping record
    let result = controller.on_tap().await;

    // Then: Camera released and cleared; recording could not start
    assert_eq!(harness.count(&Call::CameraOpened), 1);
    assert_eq!(harness.count(&Call::CameraReleased), 1);
    assert!(!controller.has_camera());
    assert!(matches!(result, Err(CoreError::RecorderFailed { .. })));
    assert!(!controller.is_recording());
}

/// WHAT: Camera open failure is logged and nothing else is touched
/// WHY: Acquisition failures degrade silently into the no-camera state
#[tokio::test(start_paused = true)]
async fn given_unavailable_camera_when_tapping_then_no_segment_created() {
    // Given: No camera can be opened
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.knobs(|k| k.fail_open = true);

    // When: Tapping record
    let result = controller.on_tap().await;

    // Then: No storage entry, no recorder activity
    assert!(result.is_err());
    assert_eq!(harness.count_created(), 0);
    assert_eq!(harness.count(&Call::RecorderStarted), 0);
    assert!(!controller.has_camera());
}

/// WHAT: Missing microphone permission triggers a request for all three capabilities
/// WHY: Nothing camera- or recorder-related may happen before a full grant
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_microphone_denied_when_tapping_then_permissions_requested_and_idle() {
    // Given: Microphone not granted
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.knobs(|k| k.denied = vec![Capability::Microphone]);
    harness.clear();

    // When: Tapping record
    controller.on_tap().await.unwrap();

    // Then: Only a permission request happened
    assert_eq!(
        harness.calls(),
        vec![Call::PermissionsRequested(Capability::REQUIRED.to_vec())]
    );
    assert_eq!(controller.state(), &RecordingState::Idle);
}

/// WHAT: A denied permission result shows a notice and takes no action
/// WHY: The gate is all-or-nothing and not retried automatically
#[tokio::test(start_paused = true)]
async fn given_denied_result_when_answered_then_notice_and_no_camera() {
    // Given: A pending request
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    harness.clear();

    // When: The user denies the microphone
    let grant = PermissionGrant::new([
        (Capability::Camera, true),
        (Capability::Microphone, false),
        (Capability::StorageWrite, true),
    ]);
    controller.on_permission_result(&grant);

    // Then: Notice shown, no camera, idle
    assert_eq!(
        harness.calls(),
        vec![Call::Notice(PERMISSIONS_REQUIRED_NOTICE.to_string())]
    );
    assert!(!controller.has_camera());
    assert!(!controller.is_recording());
}

/// WHAT: A full grant binds the preview without starting to record
/// WHY: Recording only ever starts from a tap
#[tokio::test(start_paused = true)]
async fn given_full_grant_when_answered_then_preview_bound_and_still_idle() {
    // Given: A pending request
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());

    // When: The user grants everything
    controller.on_permission_result(&PermissionGrant::uniform(true));

    // Then: Camera previewing, recorder untouched
    assert!(controller.has_camera());
    assert_eq!(harness.count(&Call::PreviewStarted), 1);
    assert_eq!(harness.count_prepared(), 0);
    assert!(!controller.is_recording());
}

/// WHAT: Surface destruction mid-recording finalizes the session before releasing the camera
/// WHY: The recorder must never outlive the camera it records from
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_recording_when_surface_destroyed_then_session_stopped_and_camera_released() {
    // Given: A running session
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_tap().await.unwrap();
    harness.clear();

    // When: The preview surface goes away
    controller.on_surface_gone().await;

    // Then: Recorder stopped and reset before the camera is released
    let calls = harness.calls();
    let stopped = calls.iter().position(|c| *c == Call::RecorderStopped).unwrap();
    let released = calls.iter().position(|c| *c == Call::CameraReleased).unwrap();
    assert!(stopped < released);
    assert!(calls.contains(&Call::PreviewStopped));
    assert!(!controller.is_recording());
    assert!(!controller.has_camera());
}

/// WHAT: Surface destruction while idle releases a held camera only
/// WHY: The surface hook is a resource cleanup, independent of recording
#[tokio::test(start_paused = true)]
async fn given_idle_with_camera_when_surface_destroyed_then_camera_released() {
    // Given: A previewing, idle controller
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_permission_result(&PermissionGrant::uniform(true));
    harness.clear();

    // When: The surface goes away
    controller.on_surface_gone().await;

    // Then: Preview stopped and camera released, recorder untouched
    assert_eq!(
        harness.calls(),
        vec![Call::PreviewStopped, Call::CameraReleased]
    );
}

/// WHAT: A new surface after destruction allows recording again
/// WHY: Surface lifecycle is independent of the session lifecycle
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_recreated_surface_when_tapping_then_camera_reopened() {
    // Given: A controller whose surface was destroyed and recreated
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_tap().await.unwrap();
    controller.on_surface_gone().await;
    controller.on_surface_ready(crate::platform::SurfaceHandle::new(8));
    harness.clear();

    // When: Tapping record
    controller.on_tap().await.unwrap();

    // Then: Camera reopened on the new surface
    assert!(harness.calls().contains(&Call::PreviewDisplay(8)));
    assert!(controller.is_recording());
}

/// WHAT: Shutdown finalizes a running session and releases the camera
/// WHY: Hardware handles must not leak past the screen's lifetime
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_recording_when_shut_down_then_segment_finalized_and_camera_released() {
    // Given: A running session
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_tap().await.unwrap();

    // When: Shutting down twice, then dropping
    controller.shutdown().await;
    controller.shutdown().await;
    drop(controller);

    // Then: Recorder finalized and camera released exactly once
    assert_eq!(harness.count(&Call::RecorderStopped), 1);
    assert_eq!(harness.count(&Call::CameraReleased), 1);
}

/// WHAT: Dropping a recording controller resets the recorder and releases the camera
/// WHY: Even without a shutdown the recorder must not keep the camera
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_recording_when_controller_dropped_then_recorder_reset_and_camera_released() {
    // Given: A running session
    let harness = Harness::new();
    let mut controller = harness.controller(ControllerSettings::default());
    controller.on_tap().await.unwrap();
    harness.clear();

    // When: The controller is dropped without a shutdown
    drop(controller);

    // Then: No finalize, but the recorder is reset and the camera given back
    assert_eq!(
        harness.calls(),
        vec![
            Call::RecorderReset,
            Call::CameraLocked,
            Call::PreviewStopped,
            Call::CameraReleased,
        ]
    );
}
