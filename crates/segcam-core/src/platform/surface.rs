/// Opaque handle to a display surface a camera preview can be bound to.
///
/// The host decides what the id refers to (a native window, a texture, a
/// terminal pane). The controller only stores and forwards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHandle {
    id: u64,
}

impl SurfaceHandle {
    /// Wrap a host-specific surface id.
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    /// Host-specific surface id.
    pub fn id(&self) -> u64 {
        self.id
    }
}
