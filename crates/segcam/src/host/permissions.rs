//! Configured grants standing in for runtime permission dialogs.

use crate::{AppCommand, config::PermissionsConfig};

use std::{fs, path::PathBuf};

use segcam_core::platform::{Capability, PermissionGrant, PermissionService, SEGMENT_RELATIVE_PATH};
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Answers permission checks from the configured policy.
///
/// Storage-write additionally requires the segment directory to be
/// writable, or creatable under a writable ancestor. Requests are answered immediately by queueing an
/// [`AppCommand::PermissionResult`] for the event loop.
pub(crate) struct PolicyPermissions {
    policy: PermissionsConfig,
    segment_dir: PathBuf,
    command_tx: mpsc::Sender<AppCommand>,
}

impl PolicyPermissions {
    pub(crate) fn new(
        policy: PermissionsConfig,
        storage_root: PathBuf,
        command_tx: mpsc::Sender<AppCommand>,
    ) -> Self {
        Self {
            policy,
            segment_dir: storage_root.join(SEGMENT_RELATIVE_PATH),
            command_tx,
        }
    }

    /// Checks the segment directory, or the nearest ancestor that exists,
    /// without creating anything. The store creates the folders on first use.
    fn storage_writable(&self) -> bool {
        self.segment_dir
            .ancestors()
            .find_map(|dir| fs::metadata(dir).ok())
            .is_some_and(|meta| meta.is_dir() && !meta.permissions().readonly())
    }
}

impl PermissionService for PolicyPermissions {
    fn is_granted(&self, capability: Capability) -> bool {
        match capability {
            Capability::Camera => self.policy.camera,
            Capability::Microphone => self.policy.microphone,
            Capability::StorageWrite => self.policy.storage_write && self.storage_writable(),
        }
    }

    #[instrument(skip(self))]
    fn request(&mut self, capabilities: &[Capability]) {
        let grant = PermissionGrant::new(
            capabilities
                .iter()
                .map(|capability| (*capability, self.is_granted(*capability))),
        );
        info!(missing = ?grant.missing(), "Permission request answered from policy");

        if let Err(e) = self.command_tx.try_send(AppCommand::PermissionResult(grant)) {
            warn!(error = ?e, "Failed to deliver permission result");
        }
    }
}
