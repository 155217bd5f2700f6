use std::sync::Arc;

use crate::models::error::RecorderError;

/// Callback invoked once per delivered capture block.
///
/// Parameters are the left and right channel blocks, each
/// `native_block_size` samples long. Mono hardware still delivers two
/// blocks; the source duplicates or zero-fills the right channel.
pub type BlockCallback = Arc<dyn Fn(&[f32], &[f32]) + Send + Sync + 'static>;

/// Interface for the external capture collaborator.
///
/// Implementations own the platform audio graph (the microphone stream
/// and its delivery scheduling) and feed equal-length stereo sample
/// blocks at a fixed native sample rate.
pub trait BlockSource: Send + Sync {
    /// Begin delivering blocks via `callback`.
    ///
    /// The callback fires on a dedicated audio thread and must return
    /// before the next scheduled delivery; keep processing minimal.
    fn start(&mut self, callback: BlockCallback) -> Result<(), RecorderError>;

    /// Stop delivering blocks and release the underlying stream.
    fn stop(&mut self) -> Result<(), RecorderError>;
}
