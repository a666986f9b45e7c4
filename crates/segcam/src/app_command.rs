use segcam_core::platform::PermissionGrant;

/// Events delivered to the application loop.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// The record button was pressed.
    Tap,
    /// A new preview surface is available.
    SurfaceCreated {
        /// Host id of the surface.
        id: u64,
    },
    /// The preview surface went away.
    SurfaceDestroyed,
    /// Answer to an earlier permission request.
    PermissionResult(PermissionGrant),
    /// Request application shutdown.
    Shutdown,
}
