//! Dynamics processing: soft-knee compressor.
//!
//! Models loudness recruitment: above the threshold the dynamic range
//! shrinks by the profile's ratio, with a quadratic soft knee around
//! the threshold and an attack/release envelope follower.

use crate::error::{AudioError, AudioResult};

/// Converts linear amplitude to decibels.
fn amp_to_db(amp: f64) -> f64 {
    20.0 * amp.abs().max(1e-10).log10()
}

/// Converts decibels to linear amplitude.
fn db_to_amp(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Compressor parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorParams {
    /// Threshold in dB below which no compression is applied.
    pub threshold_db: f64,
    /// Soft knee width in dB.
    pub knee_db: f64,
    /// Compression ratio (n:1).
    pub ratio: f64,
    /// Attack time in seconds.
    pub attack_s: f64,
    /// Release time in seconds.
    pub release_s: f64,
}

impl CompressorParams {
    fn validate(&self) -> AudioResult<()> {
        if !(-60.0..=0.0).contains(&self.threshold_db) {
            return Err(AudioError::invalid_param(
                "compressor.threshold_db",
                format!("must be -60 to 0, got {}", self.threshold_db),
            ));
        }
        if !(0.0..=60.0).contains(&self.knee_db) {
            return Err(AudioError::invalid_param(
                "compressor.knee_db",
                format!("must be 0-60, got {}", self.knee_db),
            ));
        }
        if !(1.0..=20.0).contains(&self.ratio) {
            return Err(AudioError::invalid_param(
                "compressor.ratio",
                format!("must be 1.0-20.0, got {}", self.ratio),
            ));
        }
        if !(0.0005..=0.1).contains(&self.attack_s) {
            return Err(AudioError::invalid_param(
                "compressor.attack_s",
                format!("must be 0.0005-0.1, got {}", self.attack_s),
            ));
        }
        if !(0.01..=1.0).contains(&self.release_s) {
            return Err(AudioError::invalid_param(
                "compressor.release_s",
                format!("must be 0.01-1.0, got {}", self.release_s),
            ));
        }
        Ok(())
    }

    /// Gain reduction in dB for an input level, including the soft knee.
    fn gain_reduction_db(&self, level_db: f64) -> f64 {
        let over = level_db - self.threshold_db;
        let slope = 1.0 - 1.0 / self.ratio;

        if self.knee_db > 0.0 && 2.0 * over.abs() <= self.knee_db {
            // Quadratic interpolation inside the knee
            let x = over + self.knee_db / 2.0;
            -slope * x * x / (2.0 * self.knee_db)
        } else if over > 0.0 {
            -slope * over
        } else {
            0.0
        }
    }
}

/// Applies compression to mono audio in place.
pub fn apply_compressor(
    samples: &mut [f64],
    params: &CompressorParams,
    sample_rate: f64,
) -> AudioResult<()> {
    params.validate()?;

    // Convert time constants to per-sample coefficients
    let attack_coeff = (-1.0 / (params.attack_s * sample_rate)).exp();
    let release_coeff = (-1.0 / (params.release_s * sample_rate)).exp();

    let mut envelope = 0.0;

    for sample in samples.iter_mut() {
        let input = *sample;
        let target = input.abs();

        // Envelope follower
        if target > envelope {
            envelope = attack_coeff * envelope + (1.0 - attack_coeff) * target;
        } else {
            envelope = release_coeff * envelope + (1.0 - release_coeff) * target;
        }

        let gain_db = params.gain_reduction_db(amp_to_db(envelope));
        *sample = input * db_to_amp(gain_db);
    }

    Ok(())
}
