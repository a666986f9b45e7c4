//! The fixed recording profile.
//!
//! Every segment is encoded with [`SEGMENT_PROFILE`], and the camera preview
//! is configured with the matching [`PREVIEW_SETTINGS`]. Hosts map these onto
//! their own encoder options.

mod profile;

pub use profile::{
    AudioEncoder, AudioSource, OutputFormat, PREVIEW_SETTINGS, RecordingProfile, SEGMENT_PROFILE,
    VideoEncoder, VideoSource,
};
