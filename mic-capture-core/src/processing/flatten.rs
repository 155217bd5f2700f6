use crate::models::error::RecorderError;

/// Merge ordered fixed-size blocks into one contiguous buffer of exactly
/// `total_len` samples.
///
/// The final block is only partially consumed when the blocks together
/// hold more than `total_len` samples. Holding fewer is an accounting
/// violation between the store and its counter and fails with
/// `LengthMismatch`; it cannot happen while the store invariants hold.
pub fn flatten(blocks: &[Vec<f32>], total_len: u64) -> Result<Vec<f32>, RecorderError> {
    let available: u64 = blocks.iter().map(|b| b.len() as u64).sum();
    if available < total_len {
        return Err(RecorderError::LengthMismatch {
            expected: total_len,
            actual: available,
        });
    }

    let mut out = Vec::with_capacity(total_len as usize);
    let mut remaining = total_len as usize;
    for block in blocks {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(block.len());
        out.extend_from_slice(&block[..take]);
        remaining -= take;
    }
    Ok(out)
}
