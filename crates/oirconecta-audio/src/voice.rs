//! Synthetic voice generation.
//!
//! Builds a voice-like waveform from a fundamental frequency with a
//! decaying harmonic series, slow vibrato, breath noise and a tanh soft
//! clip, all shaped by a fixed-duration ADSR envelope. Used both for
//! offline asset generation and as the deterministic speech-capture
//! fallback material.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::buffer::SampleBuffer;
use crate::envelope::AdsrParams;
use crate::error::{AudioError, AudioResult};

/// Speaker voice category for an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceCategory {
    /// Adult male voice.
    Male,
    /// Adult female voice.
    Female,
    /// Child voice.
    Child,
}

/// One partial of the harmonic series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Frequency multiplier relative to the fundamental.
    pub multiplier: f64,
    /// Amplitude in [0, 1].
    pub amplitude: f64,
}

impl Harmonic {
    /// Creates a harmonic partial.
    pub fn new(multiplier: f64, amplitude: f64) -> Self {
        Self {
            multiplier,
            amplitude,
        }
    }
}

/// Harmonic voice synthesizer.
#[derive(Debug, Clone)]
pub struct VoiceSynth {
    /// Fundamental frequency in Hz.
    pub fundamental_hz: f64,
    /// Harmonic series (multiplier, amplitude).
    pub harmonics: Vec<Harmonic>,
    /// Amplitude envelope over the utterance.
    pub envelope: AdsrParams,
    /// Vibrato rate in Hz.
    pub vibrato_hz: f64,
    /// Vibrato depth in Hz.
    pub vibrato_depth_hz: f64,
    /// Breath noise level in [0, 1].
    pub noise_level: f64,
    /// Soft-clip drive constant applied inside the tanh stage.
    pub drive: f64,
}

impl VoiceSynth {
    /// The six-partial series used for all voice presets.
    fn stock_harmonics() -> Vec<Harmonic> {
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
            .iter()
            .zip([1.0, 0.8, 0.6, 0.4, 0.3, 0.2])
            .map(|(&m, a)| Harmonic::new(m, a))
            .collect()
    }

    /// Creates the preset synthesizer for a voice category.
    ///
    /// All presets share the harmonic series, vibrato and envelope; only
    /// the fundamental shifts with the speaker.
    pub fn for_category(category: VoiceCategory) -> Self {
        let fundamental_hz = match category {
            VoiceCategory::Male => 120.0,
            VoiceCategory::Female => 210.0,
            VoiceCategory::Child => 300.0,
        };
        Self {
            fundamental_hz,
            harmonics: Self::stock_harmonics(),
            envelope: AdsrParams::default(),
            vibrato_hz: 5.0,
            vibrato_depth_hz: 2.0,
            noise_level: 0.1,
            drive: 0.5,
        }
    }

    fn validate(&self, duration_sec: f64, sample_rate: u32) -> AudioResult<()> {
        if !(duration_sec > 0.0) || !duration_sec.is_finite() {
            return Err(AudioError::invalid_param(
                "duration_sec",
                format!("must be positive, got {}", duration_sec),
            ));
        }
        if sample_rate == 0 {
            return Err(AudioError::invalid_param("sample_rate", "must be nonzero"));
        }
        if !(self.fundamental_hz > 0.0) {
            return Err(AudioError::invalid_param(
                "fundamental_hz",
                format!("must be positive, got {}", self.fundamental_hz),
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_level) {
            return Err(AudioError::invalid_param(
                "noise_level",
                format!("must be in [0, 1], got {}", self.noise_level),
            ));
        }
        for (i, h) in self.harmonics.iter().enumerate() {
            if !(h.multiplier > 0.0) {
                return Err(AudioError::invalid_param(
                    format!("harmonics[{}].multiplier", i),
                    format!("must be positive, got {}", h.multiplier),
                ));
            }
            if !(0.0..=1.0).contains(&h.amplitude) {
                return Err(AudioError::invalid_param(
                    format!("harmonics[{}].amplitude", i),
                    format!("must be in [0, 1], got {}", h.amplitude),
                ));
            }
        }
        Ok(())
    }

    /// Synthesizes an utterance of the given duration.
    ///
    /// Output length is `round(duration_sec * sample_rate)` samples and
    /// every sample lies in [-1, 1].
    pub fn synthesize(
        &self,
        duration_sec: f64,
        sample_rate: u32,
        rng: &mut Pcg32,
    ) -> AudioResult<SampleBuffer> {
        self.validate(duration_sec, sample_rate)?;

        let num_samples = (duration_sec * sample_rate as f64).round() as usize;
        let dt = 1.0 / sample_rate as f64;
        let two_pi = 2.0 * PI;

        let mut samples = Vec::with_capacity(num_samples);
        for i in 0..num_samples {
            let t = i as f64 * dt;

            let vibrato = (two_pi * self.vibrato_hz * t).sin() * self.vibrato_depth_hz;

            let mut raw = 0.0;
            for h in &self.harmonics {
                let freq = self.fundamental_hz * h.multiplier + vibrato;
                raw += h.amplitude * (two_pi * freq * t).sin();
            }

            let envelope = self.envelope.amplitude_at(t, duration_sec);
            let noise = (rng.gen::<f64>() * 2.0 - 1.0) * self.noise_level;

            let sample = ((raw + noise) * envelope * self.drive).tanh();
            samples.push(sample);
        }

        Ok(SampleBuffer::from_samples(sample_rate, samples))
    }
}
