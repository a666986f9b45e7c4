use std::{fs, panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use segcam_core::{
    CoreError, CoreResult,
    platform::{SegmentEntry, SegmentStore, SegmentTarget},
};
use tracing::{debug, instrument};

/// Stores segments as files under a media root directory.
pub(crate) struct FsSegmentStore {
    root: PathBuf,
}

impl FsSegmentStore {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl SegmentStore for FsSegmentStore {
    /// Create an empty file for the entry. Fails rather than overwrite an
    /// existing segment.
    #[track_caller]
    #[instrument(skip(self), fields(display_name = %entry.display_name))]
    fn create(&mut self, entry: &SegmentEntry) -> CoreResult<SegmentTarget> {
        let dir = self.root.join(entry.relative_path);
        let failed = |reason: String| CoreError::SegmentCreationFailed {
            display_name: entry.display_name.clone(),
            reason,
            location: ErrorLocation::from(Location::caller()),
        };

        fs::create_dir_all(&dir)
            .map_err(|e| failed(format!("Failed to create {}: {}", dir.display(), e)))?;

        let path = dir.join(&entry.display_name);
        fs::File::create_new(&path)
            .map_err(|e| failed(format!("Failed to create {}: {}", path.display(), e)))?;

        debug!(path = ?path, mime_type = entry.mime_type, "Segment file created");

        Ok(SegmentTarget {
            uri: format!("file://{}", path.display()),
            path,
        })
    }
}
