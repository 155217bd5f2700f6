/// Recording session state machine.
///
/// State transitions:
/// ```text
/// idle → capturing → stopped
///   ↑        ↑___________|  (start)
///   |____________________|  (reset)
/// ```
///
/// Blocks are only accepted while capturing; the encoding pipeline only
/// runs once the session has left the capturing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Capturing,
    Stopped,
}

impl RecorderState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Capturing)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}
