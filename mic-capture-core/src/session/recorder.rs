use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::artifact::RecordingArtifact;
use crate::models::config::{ChannelLayout, RecorderConfig};
use crate::models::error::RecorderError;
use crate::models::state::RecorderState;
use crate::processing::block_store::SampleBlockStore;
use crate::processing::flatten::flatten;
use crate::processing::interleave::interleave;
use crate::processing::resample::downsample;
use crate::processing::wav_format;
use crate::traits::block_observer::BlockObserver;
use crate::traits::block_source::{BlockCallback, BlockSource};

/// Mutable capture state, shared between the session and the installed
/// capture callback via `parking_lot::Mutex`.
struct CaptureState {
    state: RecorderState,
    store: SampleBlockStore,
}

/// Microphone recording session orchestrator.
///
/// Generic over the capture collaborator via `BlockSource`. Accumulates
/// delivered blocks while capturing, then runs the encoding pipeline
/// when the session stops:
///
/// ```text
/// [BlockSource] → [SampleBlockStore] ─ stop → flatten ─┬→ interleave → downsample → WAV bytes
///                                      (per channel)   ┘  (stereo only)
/// ```
///
/// The capture callback does O(1) amortized work per block; all O(N)
/// processing happens inside `stop()` after the source has been
/// disconnected, so the append and consume phases never overlap.
pub struct RecordingSession<S: BlockSource> {
    source: S,
    config: RecorderConfig,
    shared: Arc<Mutex<CaptureState>>,
    observer: Option<Arc<dyn BlockObserver>>,
    encoded: Option<Vec<u8>>,
}

impl<S: BlockSource> std::fmt::Debug for RecordingSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RecordingSession { .. }")
    }
}

impl<S: BlockSource> RecordingSession<S> {
    pub fn new(source: S, config: RecorderConfig) -> Result<Self, RecorderError> {
        config.validate().map_err(RecorderError::ConfigurationFailed)?;

        let shared = Arc::new(Mutex::new(CaptureState {
            state: RecorderState::Idle,
            store: SampleBlockStore::new(config.native_block_size),
        }));

        Ok(Self {
            source,
            config,
            shared,
            observer: None,
            encoded: None,
        })
    }

    /// Install the per-block observer invoked with each raw left block.
    pub fn set_observer(&mut self, observer: Arc<dyn BlockObserver>) {
        self.observer = Some(observer);
    }

    pub fn state(&self) -> RecorderState {
        self.shared.lock().state
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Samples recorded per channel so far.
    pub fn recorded_samples(&self) -> u64 {
        self.shared.lock().store.recorded_samples()
    }

    /// Begin capturing. Transitions: idle/stopped → capturing.
    ///
    /// Discards any previous recording and encoded buffer, then installs
    /// the append callback with the external source.
    pub fn start(&mut self) -> Result<(), RecorderError> {
        {
            let mut shared = self.shared.lock();
            if shared.state.is_capturing() {
                return Err(RecorderError::ConfigurationFailed(
                    "session is already capturing".into(),
                ));
            }
            shared.store.reset();
            shared.state = RecorderState::Capturing;
        }
        self.encoded = None;

        let shared = Arc::clone(&self.shared);
        let observer = self.observer.clone();
        let callback: BlockCallback = Arc::new(move |left: &[f32], right: &[f32]| {
            if let Err(err) = append_block(&shared, observer.as_deref(), left, right) {
                log::warn!("dropping delivered block: {err}");
            }
        });

        if let Err(err) = self.source.start(callback) {
            self.shared.lock().state = RecorderState::Idle;
            return Err(err);
        }

        log::debug!(
            "capture started: {:?}, {} Hz native, {} Hz target, block size {}",
            self.config.channels,
            self.config.native_sample_rate,
            self.config.target_sample_rate,
            self.config.native_block_size
        );
        Ok(())
    }

    /// Deliver one block pair directly, on the same path the installed
    /// capture callback runs. Hosts driving the session by hand (offline
    /// feeds, tests) call this instead of wiring a `BlockSource`.
    pub fn deliver_block(&self, left: &[f32], right: &[f32]) -> Result<(), RecorderError> {
        append_block(&self.shared, self.observer.as_deref(), left, right)
    }

    /// Stop capturing and encode the recording.
    ///
    /// From capturing: disconnects the source, then runs
    /// flatten → interleave → downsample → encode over the accumulated
    /// blocks. From stopped: re-runs the pipeline over the same blocks,
    /// yielding byte-identical output when no new data arrived. From
    /// idle: `NotCapturing`.
    ///
    /// Either the whole pipeline succeeds or the previously encoded
    /// buffer is left untouched; a partial WAV is never exposed.
    pub fn stop(&mut self) -> Result<RecordingArtifact, RecorderError> {
        let was_capturing = {
            let shared = self.shared.lock();
            match shared.state {
                RecorderState::Idle => return Err(RecorderError::NotCapturing),
                RecorderState::Capturing => true,
                RecorderState::Stopped => false,
            }
        };

        if was_capturing {
            // Disconnect before consuming: no block can arrive once the
            // pipeline starts reading the store.
            if let Err(err) = self.source.stop() {
                log::warn!("capture source failed to disconnect: {err}");
            }
            self.shared.lock().state = RecorderState::Stopped;
        }

        let encoded = self.run_pipeline()?;
        let artifact = RecordingArtifact::new(
            encoded.clone(),
            self.duration_secs(),
            self.config.target_sample_rate,
            self.config.channels.count(),
        );
        self.encoded = Some(encoded);

        log::info!(
            "encoded {} byte WAV ({:.2} s at {} Hz)",
            artifact.bytes.len(),
            artifact.metadata.duration_secs,
            artifact.metadata.sample_rate
        );
        Ok(artifact)
    }

    /// Discard the recording and any encoded buffer. Any state → idle.
    pub fn reset(&mut self) {
        let was_capturing = self.shared.lock().state.is_capturing();
        if was_capturing {
            if let Err(err) = self.source.stop() {
                log::warn!("capture source failed to disconnect: {err}");
            }
        }

        let mut shared = self.shared.lock();
        shared.store.reset();
        shared.state = RecorderState::Idle;
        drop(shared);

        self.encoded = None;
    }

    /// The encoded WAV from the most recent stop, if any.
    pub fn encoded_wav(&self) -> Option<&[u8]> {
        self.encoded.as_deref()
    }

    /// Package the encoded recording for download by the host.
    ///
    /// Returns `None` until a stop has succeeded. Each call derives a
    /// fresh timestamped file name over the same bytes.
    pub fn create_artifact(&self) -> Option<RecordingArtifact> {
        let bytes = self.encoded.clone()?;
        Some(RecordingArtifact::new(
            bytes,
            self.duration_secs(),
            self.config.target_sample_rate,
            self.config.channels.count(),
        ))
    }

    /// Flatten → interleave → downsample → encode over the stored blocks.
    ///
    /// Capture is disconnected before this runs, so holding the lock for
    /// the whole pipeline is uncontended by construction.
    fn run_pipeline(&self) -> Result<Vec<u8>, RecorderError> {
        let shared = self.shared.lock();
        let store = &shared.store;
        let recorded = store.recorded_samples();

        let left = flatten(store.left_blocks(), recorded)?;
        let final_buffer = match self.config.channels {
            ChannelLayout::Mono => left,
            ChannelLayout::Stereo => {
                let right = flatten(store.right_blocks(), recorded)?;
                interleave(&left, &right)?
            }
        };

        let downsampled = downsample(
            &final_buffer,
            self.config.native_sample_rate,
            self.config.target_sample_rate,
        )?;

        wav_format::encode_wav(
            &downsampled,
            self.config.channels.count(),
            self.config.target_sample_rate,
            self.config.byte_rate(),
        )
    }

    fn duration_secs(&self) -> f64 {
        self.recorded_samples() as f64 / f64::from(self.config.native_sample_rate)
    }
}

/// Append one delivered block pair and notify the observer.
///
/// Runs on the capture callback path: one lock, two pushes, no pipeline
/// work. Observer panics are caught and logged so they cannot disturb
/// the capture cadence.
fn append_block(
    shared: &Mutex<CaptureState>,
    observer: Option<&dyn BlockObserver>,
    left: &[f32],
    right: &[f32],
) -> Result<(), RecorderError> {
    {
        let mut guard = shared.lock();
        if !guard.state.is_capturing() {
            return Err(RecorderError::NotCapturing);
        }
        guard.store.append(left, right);
    }

    if let Some(observer) = observer {
        if panic::catch_unwind(AssertUnwindSafe(|| observer.on_block(left))).is_err() {
            log::warn!("block observer panicked; capture continues");
        }
    }
    Ok(())
}
