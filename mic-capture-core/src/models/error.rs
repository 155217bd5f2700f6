use thiserror::Error;

/// Errors that can occur during recording and encoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("length mismatch: expected {expected} samples, found {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    #[error("unsupported rate: cannot resample {source_rate} Hz up to {target} Hz")]
    UnsupportedRate { source_rate: u32, target: u32 },

    #[error("session is not capturing")]
    NotCapturing,

    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}
