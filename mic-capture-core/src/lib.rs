//! # mic-capture-core
//!
//! Platform-agnostic microphone recording core library.
//!
//! Accumulates the fixed-size sample blocks an external capture source
//! delivers, then encodes the finished take as an uncompressed PCM16 WAV
//! byte stream. Platform backends (browser audio graph, WASAPI, Core
//! Audio) implement the `BlockSource` trait and plug into the generic
//! `RecordingSession`.
//!
//! ## Architecture
//!
//! ```text
//! mic-capture-core (this crate)
//! ├── traits/       ← BlockSource, BlockObserver
//! ├── models/       ← RecorderError, RecorderState, RecorderConfig, RecordingArtifact
//! ├── processing/   ← SampleBlockStore, flatten, interleave, downsample, WAV encoding
//! └── session/      ← RecordingSession (generic orchestrator)
//! ```
//!
//! Data flow:
//!
//! ```text
//! [BlockSource] → [SampleBlockStore] ─ stop → flatten → interleave → downsample → WAV bytes
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::artifact::{ArtifactMetadata, RecordingArtifact, WAV_MIME_TYPE};
pub use models::config::{ChannelLayout, RecorderConfig};
pub use models::error::RecorderError;
pub use models::state::RecorderState;
pub use processing::block_store::SampleBlockStore;
pub use processing::flatten::flatten;
pub use processing::interleave::interleave;
pub use processing::resample::downsample;
pub use processing::wav_format::{encode_wav, WAV_HEADER_SIZE};
pub use session::recorder::RecordingSession;
pub use traits::block_observer::BlockObserver;
pub use traits::block_source::{BlockCallback, BlockSource};
