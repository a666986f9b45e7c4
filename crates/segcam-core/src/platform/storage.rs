use crate::CoreResult;

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// MIME type of every segment.
pub const SEGMENT_MIME_TYPE: &str = "video/mp4";

/// Collection-relative folder segments are stored under.
pub const SEGMENT_RELATIVE_PATH: &str = "Movies/MyAppVideos";

/// A request for a new media entry in shared storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentEntry {
    /// File name shown in the media collection.
    pub display_name: String,
    /// MIME type of the entry.
    pub mime_type: &'static str,
    /// Folder inside the media collection.
    pub relative_path: &'static str,
}

impl SegmentEntry {
    /// Entry for a segment created at `created_at`.
    ///
    /// Names carry the creation time in Unix milliseconds, so two entries
    /// collide only when created within the same millisecond.
    pub fn at(created_at: DateTime<Utc>) -> Self {
        Self {
            display_name: format!("video_{}.mp4", created_at.timestamp_millis()),
            mime_type: SEGMENT_MIME_TYPE,
            relative_path: SEGMENT_RELATIVE_PATH,
        }
    }

    /// Entry for a segment created now.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// A created storage entry the recorder can write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTarget {
    /// Storage-level identifier of the entry.
    pub uri: String,
    /// Writable location of the entry.
    pub path: PathBuf,
}

/// Shared media storage.
pub trait SegmentStore: Send {
    /// Insert a new entry and return a writable target for it.
    fn create(&mut self, entry: &SegmentEntry) -> CoreResult<SegmentTarget>;
}
