//! Profile-keyed effect chain.
//!
//! Fixed stage order: lowpass filter → compressor → distortion →
//! output gain (offline), or lowpass → compressor → gain as live stage
//! descriptors. The distortion stage exists only in the offline render;
//! the live chain leaves it out to preserve playback quality.

use serde::Serialize;

use super::dynamics::{apply_compressor, CompressorParams};
use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};
use crate::filter::BiquadFilter;
use crate::profile::HearingLossProfile;

/// Compressor threshold, constant across profiles.
pub const THRESHOLD_DB: f64 = -24.0;

/// Offline chain constants.
pub const OFFLINE_Q: f64 = 1.0;
pub const OFFLINE_KNEE_DB: f64 = 30.0;
pub const OFFLINE_ATTACK_S: f64 = 0.003;
pub const OFFLINE_RELEASE_S: f64 = 0.25;

/// Live chain constants, softer for real-time playback.
pub const LIVE_Q: f64 = 0.5;
pub const LIVE_KNEE_DB: f64 = 40.0;
pub const LIVE_ATTACK_S: f64 = 0.010;
pub const LIVE_RELEASE_S: f64 = 0.100;

/// One stage of a live playback graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageDescriptor {
    /// Lowpass filter stage.
    Lowpass {
        /// Cutoff frequency in Hz.
        cutoff_hz: f64,
        /// Resonance Q.
        q: f64,
    },
    /// Dynamics compressor stage.
    Compressor {
        /// Threshold in dB.
        threshold_db: f64,
        /// Soft knee width in dB.
        knee_db: f64,
        /// Compression ratio (n:1).
        ratio: f64,
        /// Attack time in seconds.
        attack_s: f64,
        /// Release time in seconds.
        release_s: f64,
    },
    /// Output gain stage.
    Gain {
        /// Linear gain level in [0, 1].
        level: f64,
    },
}

/// Result of processing a buffer through a profile chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// The processed (or passed-through) audio.
    pub buffer: SampleBuffer,
    /// True when the chain could not run and the input was passed
    /// through unmodified.
    pub degraded: bool,
}

/// Builds the live-playback stage descriptors for a profile.
///
/// Descriptors are wired into a host audio graph in order. The live
/// parameters are softer than the offline ones and skip distortion.
pub fn build_live_chain(profile: &HearingLossProfile) -> Vec<StageDescriptor> {
    vec![
        StageDescriptor::Lowpass {
            cutoff_hz: profile.filter_cutoff_hz,
            q: LIVE_Q,
        },
        StageDescriptor::Compressor {
            threshold_db: THRESHOLD_DB,
            knee_db: LIVE_KNEE_DB,
            ratio: profile.compression_ratio,
            attack_s: LIVE_ATTACK_S,
            release_s: LIVE_RELEASE_S,
        },
        StageDescriptor::Gain {
            level: profile.output_gain,
        },
    ]
}

/// Applies the offline effect chain of a profile to a buffer.
///
/// Fails with `EffectChainUnavailable` when the chain cannot run on the
/// buffer's sample rate (cutoff at or above Nyquist). Use
/// [`apply_profile_or_passthrough`] when pass-through recovery is wanted.
pub fn apply_profile(
    buffer: &SampleBuffer,
    profile: &HearingLossProfile,
) -> AudioResult<SampleBuffer> {
    let sample_rate = buffer.sample_rate() as f64;
    let nyquist = sample_rate / 2.0;
    if profile.filter_cutoff_hz >= nyquist {
        return Err(AudioError::chain_unavailable(format!(
            "cutoff {} Hz at or above Nyquist ({} Hz)",
            profile.filter_cutoff_hz, nyquist
        )));
    }

    let mut samples = buffer.samples().to_vec();

    // 1. Lowpass: high-frequency sensitivity loss
    let mut filter = BiquadFilter::lowpass(profile.filter_cutoff_hz, OFFLINE_Q, sample_rate);
    filter.process_buffer(&mut samples);

    // 2. Compression: loudness recruitment
    let params = CompressorParams {
        threshold_db: THRESHOLD_DB,
        knee_db: OFFLINE_KNEE_DB,
        ratio: profile.compression_ratio,
        attack_s: OFFLINE_ATTACK_S,
        release_s: OFFLINE_RELEASE_S,
    };
    apply_compressor(&mut samples, &params, sample_rate)?;

    // 3. Distortion: cochlear signal degradation, offline only
    if profile.distortion > 0.0 {
        for s in samples.iter_mut() {
            *s *= 1.0 + profile.distortion * (*s * 10.0).sin();
        }
    }

    // 4. Output gain: overall audibility loss
    for s in samples.iter_mut() {
        *s *= profile.output_gain;
    }

    Ok(SampleBuffer::from_samples(buffer.sample_rate(), samples))
}

/// Applies the profile chain, passing the input through unmodified when
/// the chain is unavailable.
///
/// Parameter errors (`InvalidParameter`) still surface; only substrate
/// unavailability degrades.
pub fn apply_profile_or_passthrough(
    buffer: &SampleBuffer,
    profile: &HearingLossProfile,
) -> AudioResult<Processed> {
    match apply_profile(buffer, profile) {
        Ok(processed) => Ok(Processed {
            buffer: processed,
            degraded: false,
        }),
        Err(AudioError::EffectChainUnavailable { .. }) => Ok(Processed {
            buffer: buffer.clone(),
            degraded: true,
        }),
        Err(e) => Err(e),
    }
}
