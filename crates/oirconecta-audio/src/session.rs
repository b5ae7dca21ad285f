//! Scoped audio playback session.
//!
//! A session owns one live playback at a time over a host playback
//! backend. It is passed explicitly rather than held as a global:
//! opened per playback request, released on drop along with any
//! in-flight playback. `stop` is idempotent, and starting a new
//! playback stops the previous one first.

use crate::buffer::SampleBuffer;
use crate::effects::{build_live_chain, StageDescriptor};
use crate::error::{AudioError, AudioResult};
use crate::profile::HearingLossProfile;

/// Host capability that realizes a live effect graph.
pub trait PlaybackBackend {
    /// True when the host audio substrate can be used.
    fn is_available(&self) -> bool;

    /// Wires the stage descriptors and starts playing the buffer.
    fn start(&mut self, buffer: &SampleBuffer, stages: &[StageDescriptor]) -> AudioResult<()>;

    /// Tears down the current playback. Only called while playing.
    fn stop(&mut self);
}

/// An open playback session holding at most one in-flight playback.
#[derive(Debug)]
pub struct AudioSession<B: PlaybackBackend> {
    backend: B,
    playing: bool,
}

impl<B: PlaybackBackend> AudioSession<B> {
    /// Opens a session over a backend.
    ///
    /// Fails with `EffectChainUnavailable` when the substrate is absent;
    /// callers recover by playing unprocessed audio elsewhere and
    /// reporting degraded mode.
    pub fn open(backend: B) -> AudioResult<Self> {
        if !backend.is_available() {
            return Err(AudioError::chain_unavailable(
                "playback backend is not available",
            ));
        }
        Ok(Self {
            backend,
            playing: false,
        })
    }

    /// Starts playing a buffer through the live chain of a profile,
    /// stopping any previous playback first.
    pub fn play(&mut self, buffer: &SampleBuffer, profile: &HearingLossProfile) -> AudioResult<()> {
        self.stop();
        let stages = build_live_chain(profile);
        self.backend.start(buffer, &stages)?;
        self.playing = true;
        Ok(())
    }

    /// Stops the current playback. Safe to call any number of times.
    pub fn stop(&mut self) {
        if self.playing {
            self.backend.stop();
            self.playing = false;
        }
    }

    /// True while a playback is in flight.
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl<B: PlaybackBackend> Drop for AudioSession<B> {
    fn drop(&mut self) {
        self.stop();
    }
}
