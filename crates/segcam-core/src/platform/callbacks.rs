use crate::platform::{PermissionGrant, SurfaceHandle};

use async_trait::async_trait;

/// Platform notifications delivered to the recording controller.
///
/// A host binds these to its own event mechanism and calls them from the
/// same loop that delivers taps and timer fires.
#[async_trait]
pub trait PlatformCallbacks {
    /// The preview surface exists and can be drawn to.
    fn on_surface_ready(&mut self, surface: SurfaceHandle);

    /// The preview surface was destroyed.
    ///
    /// Finalizes a running session before the camera is let go.
    async fn on_surface_gone(&mut self);

    /// The user answered a permission request.
    fn on_permission_result(&mut self, grant: &PermissionGrant);
}
