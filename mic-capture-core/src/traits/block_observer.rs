/// Per-block observer for live visualization.
///
/// Called from the capture callback with the raw left-channel block, at
/// most once per delivered block. The session catches and logs observer
/// panics so a misbehaving observer cannot disturb the capture cadence.
pub trait BlockObserver: Send + Sync {
    fn on_block(&self, samples: &[f32]);
}
