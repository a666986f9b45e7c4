use crate::config::default_granted;

use serde::{Deserialize, Serialize};

/// Desktop grant policy standing in for runtime permission dialogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Allow camera access.
    #[serde(default = "default_granted")]
    pub camera: bool,

    /// Allow microphone access.
    #[serde(default = "default_granted")]
    pub microphone: bool,

    /// Allow writing segments to storage.
    #[serde(default = "default_granted")]
    pub storage_write: bool,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            camera: default_granted(),
            microphone: default_granted(),
            storage_write: default_granted(),
        }
    }
}
