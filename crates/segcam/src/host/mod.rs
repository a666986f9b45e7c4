//! Desktop bindings for the core capability traits.

pub(crate) mod camera;
pub(crate) mod ffmpeg_recorder;
pub(crate) mod permissions;
pub(crate) mod segment_store;
mod splash_screen;
pub(crate) mod terminal_view;

pub(crate) use {
    camera::DeviceCameraService, ffmpeg_recorder::FfmpegRecorder, permissions::PolicyPermissions,
    segment_store::FsSegmentStore, splash_screen::TerminalSplash, terminal_view::TerminalView,
};
