use crate::{AppError, AppResult};

use std::{panic::Location, path::PathBuf};

use directories::{ProjectDirs, UserDirs};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Segment storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Media collection root. Segments land in `<root>/Movies/MyAppVideos`.
    ///
    /// Defaults to the user's home directory.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured root, else the user's home directory, else the
    /// application data directory.
    #[track_caller]
    pub fn resolve_root(&self) -> AppResult<PathBuf> {
        if let Some(root) = &self.root_dir {
            return Ok(root.clone());
        }

        if let Some(dirs) = UserDirs::new() {
            return Ok(dirs.home_dir().to_path_buf());
        }

        ProjectDirs::from("com", "segcam", "Segcam")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AppError::ConfigError {
                reason: "Failed to resolve a storage directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
