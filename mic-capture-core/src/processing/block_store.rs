/// Per-channel accumulator for captured sample blocks.
///
/// Blocks are stored in arrival order and left untouched until the
/// stop-time pipeline flattens them. Memory grows linearly with
/// recording time; that is the accepted cost of keeping the capture
/// path O(1).
#[derive(Debug)]
pub struct SampleBlockStore {
    left: Vec<Vec<f32>>,
    right: Vec<Vec<f32>>,
    block_size: usize,
    recorded_samples: u64,
}

impl SampleBlockStore {
    pub fn new(block_size: u32) -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            block_size: block_size as usize,
            recorded_samples: 0,
        }
    }

    /// Append one block per channel in arrival order.
    ///
    /// The counter advances by the declared block size regardless of
    /// block content. A wrong-length block violates the source contract
    /// and panics immediately.
    pub fn append(&mut self, left: &[f32], right: &[f32]) {
        assert_eq!(left.len(), self.block_size, "left block length violates source contract");
        assert_eq!(right.len(), self.block_size, "right block length violates source contract");

        self.left.push(left.to_vec());
        self.right.push(right.to_vec());
        self.recorded_samples += self.block_size as u64;
    }

    /// Clear both channels and zero the counter.
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.recorded_samples = 0;
    }

    pub fn left_blocks(&self) -> &[Vec<f32>] {
        &self.left
    }

    pub fn right_blocks(&self) -> &[Vec<f32>] {
        &self.right
    }

    /// Total samples recorded per channel.
    pub fn recorded_samples(&self) -> u64 {
        self.recorded_samples
    }

    pub fn block_count(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}
