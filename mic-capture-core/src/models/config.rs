use serde::{Deserialize, Serialize};

/// Channel layout of the encoded recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    /// Channel count written to the WAV header.
    pub fn count(&self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

/// Configuration for a recording session.
///
/// Fixed at session creation; a session never changes format mid-take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Channel layout of the encoded output (default: stereo).
    pub channels: ChannelLayout,

    /// Sample rate of the encoded output in Hz (default: 44100).
    pub target_sample_rate: u32,

    /// Sample rate the capture source delivers at in Hz (default: 44100).
    pub native_sample_rate: u32,

    /// Samples per channel in each delivered block (default: 2048).
    pub native_block_size: u32,
}

impl RecorderConfig {
    /// Bytes per second of encoded audio: `rate * channels * 2` (PCM16).
    pub fn byte_rate(&self) -> u32 {
        self.target_sample_rate * u32::from(self.channels.count()) * 2
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.target_sample_rate == 0 {
            return Err("target sample rate must be positive".into());
        }
        if self.native_sample_rate == 0 {
            return Err("native sample rate must be positive".into());
        }
        if self.native_block_size == 0 {
            return Err("native block size must be positive".into());
        }
        if self.target_sample_rate > self.native_sample_rate {
            return Err(format!(
                "target sample rate {} Hz exceeds native rate {} Hz",
                self.target_sample_rate, self.native_sample_rate
            ));
        }
        Ok(())
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            channels: ChannelLayout::Stereo,
            target_sample_rate: 44100,
            native_sample_rate: 44100,
            native_block_size: 2048,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RecorderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.channels, ChannelLayout::Stereo);
        assert_eq!(config.target_sample_rate, 44100);
        assert_eq!(config.native_block_size, 2048);
    }

    #[test]
    fn byte_rate_stereo() {
        let config = RecorderConfig::default();
        assert_eq!(config.byte_rate(), 44100 * 2 * 2);
    }

    #[test]
    fn byte_rate_mono() {
        let config = RecorderConfig {
            channels: ChannelLayout::Mono,
            target_sample_rate: 22050,
            ..Default::default()
        };
        assert_eq!(config.byte_rate(), 22050 * 2);
    }

    #[test]
    fn validate_rejects_zero_rates() {
        let config = RecorderConfig {
            target_sample_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RecorderConfig {
            native_sample_rate: 0,
            target_sample_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RecorderConfig {
            native_block_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_upsampling_config() {
        let config = RecorderConfig {
            target_sample_rate: 48000,
            native_sample_rate: 44100,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("exceeds native rate"), "got: {err}");
    }
}
