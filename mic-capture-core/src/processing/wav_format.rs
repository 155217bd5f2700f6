use crate::models::error::RecorderError;

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Bits per sample of the encoded output.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Block alignment written at offset 32.
///
/// Pinned to 4 (one stereo 16-bit frame) regardless of channel count.
/// Decoders of existing recordings expect the field as-is, so mono
/// output carries it too.
pub const BLOCK_ALIGN: u16 = 4;

/// Serialize `samples` into a complete RIFF/WAVE PCM16 byte stream.
///
/// Format: PCM (format code 1), little-endian.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    36 + data_size
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate
/// [32-33]  4 (block align, fixed)
/// [34-35]  16 (bits per sample)
/// [36-39]  "data"
/// [40-43]  data_size = samples.len() * 2
/// [44..]   16-bit PCM samples
/// ```
pub fn encode_wav(
    samples: &[f32],
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
) -> Result<Vec<u8>, RecorderError> {
    let data_size = samples
        .len()
        .checked_mul(2)
        .filter(|&n| n <= (u32::MAX - 36) as usize)
        .ok_or_else(|| {
            RecorderError::EncodingFailed(format!(
                "{} samples exceed the WAV container size limit",
                samples.len()
            ))
        })? as u32;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + data_size as usize);

    // RIFF chunk descriptor
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data sub-chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    for &sample in samples {
        out.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }

    Ok(out)
}

/// Convert one float sample to PCM16.
///
/// Scales by 32767 and saturates into the i16 range, so out-of-range
/// input pins to the rails instead of wrapping.
fn sample_to_i16(sample: f32) -> i16 {
    let scaled = (f64::from(sample) * 32767.0).round();
    scaled.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn le_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn le_i16(bytes: &[u8], offset: usize) -> i16 {
        i16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    #[test]
    fn header_magic() {
        let wav = encode_wav(&[], 2, 44100, 176400).unwrap();
        assert_eq!(wav.len(), WAV_HEADER_SIZE);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
    }

    #[test]
    fn header_round_trips_format_parameters() {
        let samples = vec![0.0f32; 6];
        let wav = encode_wav(&samples, 1, 22050, 44100).unwrap();

        assert_eq!(le_u32(&wav, 16), 16); // fmt chunk size
        assert_eq!(le_u16(&wav, 20), 1); // PCM format code
        assert_eq!(le_u16(&wav, 22), 1); // channels
        assert_eq!(le_u32(&wav, 24), 22050); // sample rate
        assert_eq!(le_u32(&wav, 28), 44100); // byte rate
        assert_eq!(le_u16(&wav, 34), 16); // bits per sample
        assert_eq!(le_u32(&wav, 40), 12); // data size = 6 samples * 2
        assert_eq!(le_u32(&wav, 4), 36 + 12); // RIFF chunk size
        assert_eq!(wav.len(), 44 + 12);
    }

    #[test]
    fn block_align_is_pinned_to_four_even_for_mono() {
        let stereo = encode_wav(&[0.0; 4], 2, 44100, 176400).unwrap();
        let mono = encode_wav(&[0.0; 4], 1, 44100, 88200).unwrap();
        assert_eq!(le_u16(&stereo, 32), 4);
        assert_eq!(le_u16(&mono, 32), 4);
    }

    #[test]
    fn pcm_values_scale_by_32767() {
        let wav = encode_wav(&[0.0, 1.0, -1.0, 0.5], 1, 44100, 88200).unwrap();

        assert_eq!(le_i16(&wav, 44), 0);
        assert_eq!(le_i16(&wav, 46), 32767);
        assert_eq!(le_i16(&wav, 48), -32767);
        assert_eq!(le_i16(&wav, 50), 16384); // round(0.5 * 32767)
    }

    #[test]
    fn out_of_range_samples_saturate() {
        let wav = encode_wav(&[1.5, -1.5], 1, 44100, 88200).unwrap();

        assert_eq!(le_i16(&wav, 44), 32767);
        assert_eq!(le_i16(&wav, 46), -32768);
    }

    #[test]
    fn pcm_round_trip_within_one_unit() {
        let samples: Vec<f32> = (0..200).map(|i| ((i as f32) / 100.0) - 1.0).collect();
        let wav = encode_wav(&samples, 1, 44100, 88200).unwrap();

        for (i, &sample) in samples.iter().enumerate() {
            let decoded = le_i16(&wav, 44 + i * 2);
            let expected = (f64::from(sample.clamp(-1.0, 1.0)) * 32767.0).round();
            assert!(
                (f64::from(decoded) - expected).abs() <= 1.0,
                "sample {i}: decoded {decoded}, expected ~{expected}"
            );
        }
    }
}
