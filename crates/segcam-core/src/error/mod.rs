use error_location::ErrorLocation;
use thiserror::Error;

/// Recording pipeline errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The camera device could not be acquired.
    #[error("Camera unavailable: {reason} {location}")]
    CameraUnavailable {
        /// Description of why the camera could not be opened.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The camera was acquired but could not be configured for preview.
    #[error("Camera configuration failed: {reason} {location}")]
    CameraConfiguration {
        /// Description of the configuration failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The media recorder failed to prepare, start or stop.
    #[error("Recorder failed: {reason} {location}")]
    RecorderFailed {
        /// Description of the recorder failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A new output segment could not be created in storage.
    #[error("Segment creation failed for {display_name}: {reason} {location}")]
    SegmentCreationFailed {
        /// Display name of the entry that was requested.
        display_name: String,
        /// Description of the storage failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
