use crate::platform::SegmentTarget;

use tokio::time::Instant;
use uuid::Uuid;

/// Recording state of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordingState {
    /// Not currently recording.
    #[default]
    Idle,
    /// A recorder is running against the current segment.
    Recording(ActiveSession),
}

impl RecordingState {
    /// Whether a session is in progress.
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording(_))
    }

    /// The running session, if any.
    pub fn session(&self) -> Option<&ActiveSession> {
        match self {
            Self::Idle => None,
            Self::Recording(session) => Some(session),
        }
    }
}

/// Bookkeeping for one start-to-stop recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    /// Unique session ID for log correlation.
    pub session_id: Uuid,
    /// When recording started.
    pub started_at: Instant,
    /// 1-based index of the segment being written.
    pub segment_index: u32,
    /// The segment being written.
    pub current_segment: SegmentTarget,
}
