use crate::models::error::RecorderError;

/// Downsample `input` from `source_rate` to `target_rate` by block
/// averaging.
///
/// Output sample `i` is the arithmetic mean of the input samples whose
/// index falls in the half-open window
/// `[round(i * ratio), round((i + 1) * ratio))` where
/// `ratio = source_rate / target_rate`, clamped into the input and
/// widened to at least one sample. Averaging the whole window smooths
/// the signal instead of aliasing on non-integer ratios.
///
/// Matching rates return the input unchanged. Upsampling is not a
/// supported path and fails with `UnsupportedRate`.
pub fn downsample(input: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>, RecorderError> {
    if target_rate > source_rate {
        return Err(RecorderError::UnsupportedRate {
            source_rate,
            target: target_rate,
        });
    }
    if source_rate == target_rate {
        return Ok(input.to_vec());
    }

    let ratio = f64::from(source_rate) / f64::from(target_rate);
    let output_len = (input.len() as f64 / ratio).floor() as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        // The rounding rule is load-bearing: it keeps the output length
        // deterministic and window boundaries drift-free across long
        // buffers.
        let start = ((i as f64 * ratio).round() as usize).min(input.len() - 1);
        let end = (((i + 1) as f64 * ratio).round() as usize).clamp(start + 1, input.len());

        let window = &input[start..end];
        let sum: f32 = window.iter().sum();
        output.push(sum / window.len() as f32);
    }

    Ok(output)
}
