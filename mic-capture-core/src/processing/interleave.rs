use crate::models::error::RecorderError;

/// Interleave two equal-length channels into one stereo buffer
/// `[L0, R0, L1, R1, ...]`.
///
/// Unequal input lengths indicate an accounting bug upstream and fail
/// with `LengthMismatch`.
pub fn interleave(left: &[f32], right: &[f32]) -> Result<Vec<f32>, RecorderError> {
    if left.len() != right.len() {
        return Err(RecorderError::LengthMismatch {
            expected: left.len() as u64,
            actual: right.len() as u64,
        });
    }

    let mut stereo = Vec::with_capacity(left.len() * 2);
    for (l, r) in left.iter().zip(right) {
        stereo.push(*l);
        stereo.push(*r);
    }
    Ok(stereo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_alternates_channels() {
        let left = [1.0, 2.0, 3.0];
        let right = [4.0, 5.0, 6.0];

        let stereo = interleave(&left, &right).unwrap();

        assert_eq!(stereo, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        for i in 0..left.len() {
            assert_eq!(stereo[2 * i], left[i]);
            assert_eq!(stereo[2 * i + 1], right[i]);
        }
    }

    #[test]
    fn interleave_doubles_length() {
        let channel = vec![0.5; 100];
        let stereo = interleave(&channel, &channel).unwrap();
        assert_eq!(stereo.len(), 200);
    }

    #[test]
    fn interleave_empty_is_empty() {
        assert!(interleave(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn interleave_unequal_lengths_fails() {
        let err = interleave(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            RecorderError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
