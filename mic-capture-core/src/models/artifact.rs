use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// MIME type of the encoded output.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// A finished recording, packaged for download or upload by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingArtifact {
    pub metadata: ArtifactMetadata,
    pub bytes: Vec<u8>,
}

/// Serializable description of a finished recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub channels: u16,
    pub checksum: String,
    pub created_at: String,
}

impl RecordingArtifact {
    /// Package encoded WAV bytes with a timestamped `.wav` file name.
    pub(crate) fn new(bytes: Vec<u8>, duration_secs: f64, sample_rate: u32, channels: u16) -> Self {
        let now = Utc::now();
        let metadata = ArtifactMetadata {
            id: uuid::Uuid::new_v4().to_string(),
            file_name: format!("{}.wav", now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            mime_type: WAV_MIME_TYPE.to_string(),
            duration_secs,
            sample_rate,
            channels,
            checksum: sha256_hex(&bytes),
            created_at: now.to_rfc3339(),
        };
        Self { metadata, bytes }
    }
}

/// SHA-256 hex digest of the encoded bytes.
fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_file_name_is_timestamped_wav() {
        let artifact = RecordingArtifact::new(vec![1, 2, 3], 0.5, 44100, 2);
        assert!(artifact.metadata.file_name.ends_with(".wav"));
        // ISO-8601 UTC timestamp with millisecond precision, e.g.
        // 2026-08-07T12:34:56.789Z.wav
        assert!(artifact.metadata.file_name.contains('T'));
        assert!(artifact.metadata.file_name.contains("Z.wav"));
    }

    #[test]
    fn artifact_carries_wav_mime_type() {
        let artifact = RecordingArtifact::new(vec![0; 44], 1.0, 22050, 1);
        assert_eq!(artifact.metadata.mime_type, "audio/wav");
        assert_eq!(artifact.metadata.sample_rate, 22050);
        assert_eq!(artifact.metadata.channels, 1);
    }

    #[test]
    fn checksum_is_sha256_hex() {
        let artifact = RecordingArtifact::new(Vec::new(), 0.0, 44100, 2);
        // SHA-256 of the empty byte string.
        assert_eq!(
            artifact.metadata.checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn identical_bytes_identical_checksum() {
        let a = RecordingArtifact::new(vec![7; 64], 1.0, 44100, 2);
        let b = RecordingArtifact::new(vec![7; 64], 1.0, 44100, 2);
        assert_eq!(a.metadata.checksum, b.metadata.checksum);
        assert_ne!(a.metadata.id, b.metadata.id);
    }
}
