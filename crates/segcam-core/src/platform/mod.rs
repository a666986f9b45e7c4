//! Capability traits the recording controller drives.
//!
//! Every hardware or OS service the controller touches sits behind one of
//! these traits. A host binds them to its own camera, encoder, storage,
//! permission and widget services and forwards its surface and permission
//! notifications through [`PlatformCallbacks`].

mod callbacks;
mod camera;
mod permission;
mod recorder;
mod storage;
mod surface;
mod view;

pub use {
    callbacks::PlatformCallbacks,
    camera::{CameraHandle, CameraService, FocusMode, PreviewSettings},
    permission::{Capability, PermissionGrant, PermissionService},
    recorder::{MediaRecorder, RecorderSetup},
    storage::{SEGMENT_MIME_TYPE, SEGMENT_RELATIVE_PATH, SegmentEntry, SegmentStore, SegmentTarget},
    surface::SurfaceHandle,
    view::RecordingView,
};
