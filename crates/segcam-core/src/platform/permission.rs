/// Runtime capabilities the recorder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Camera access.
    Camera,
    /// Microphone access.
    Microphone,
    /// Permission to write media to shared storage.
    StorageWrite,
}

impl Capability {
    /// The capabilities that must all be granted before capture can start.
    pub const REQUIRED: [Capability; 3] = [
        Capability::Camera,
        Capability::Microphone,
        Capability::StorageWrite,
    ];
}

/// Host permission checks and requests.
pub trait PermissionService: Send {
    /// Whether `capability` is currently granted.
    fn is_granted(&self, capability: Capability) -> bool;

    /// Ask the user for `capabilities`.
    ///
    /// The answer arrives later through
    /// [`PlatformCallbacks::on_permission_result`](crate::PlatformCallbacks::on_permission_result).
    fn request(&mut self, capabilities: &[Capability]);
}

/// The user's answer to a permission request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGrant {
    results: Vec<(Capability, bool)>,
}

impl PermissionGrant {
    /// Build a grant from per-capability answers.
    pub fn new(results: impl IntoIterator<Item = (Capability, bool)>) -> Self {
        Self {
            results: results.into_iter().collect(),
        }
    }

    /// A grant answering every required capability with `granted`.
    pub fn uniform(granted: bool) -> Self {
        Self::new(Capability::REQUIRED.into_iter().map(|c| (c, granted)))
    }

    /// Required capabilities that were denied or not answered at all.
    pub fn missing(&self) -> Vec<Capability> {
        Capability::REQUIRED
            .into_iter()
            .filter(|required| {
                !self
                    .results
                    .iter()
                    .any(|(capability, granted)| capability == required && *granted)
            })
            .collect()
    }

    /// True only if every required capability was granted.
    pub fn all_granted(&self) -> bool {
        self.missing().is_empty()
    }
}
