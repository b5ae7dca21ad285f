//! ADSR envelope evaluation over a fixed utterance duration.
//!
//! Voice synthesis shapes each utterance with an Attack-Decay-Sustain-
//! Release curve evaluated against the total duration: linear 0→1 over
//! the attack, linear 1→sustain over the decay, flat sustain, then a
//! linear fade to 0 over the tail. Overlapping phases clamp the sustain
//! window instead of failing.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        // The voice generator's stock envelope.
        Self {
            attack: 0.1,
            decay: 0.2,
            sustain: 0.7,
            release: 0.5,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters, clamping each field to its valid range.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Evaluates the envelope at time `t` for a sound of `duration` seconds.
    ///
    /// Times outside [0, duration) evaluate to 0. When attack+decay or
    /// release exceed the duration, the release start is pushed back to
    /// the end of the decay so the phases never overlap.
    pub fn amplitude_at(&self, t: f64, duration: f64) -> f64 {
        if t < 0.0 || t >= duration || duration <= 0.0 {
            return 0.0;
        }

        let attack = self.attack.min(duration);
        let decay = self.decay.min(duration - attack);
        let release_start = (duration - self.release).max(attack + decay);

        if t < attack {
            t / attack
        } else if t < attack + decay {
            1.0 - (1.0 - self.sustain) * (t - attack) / decay
        } else if t < release_start {
            self.sustain
        } else {
            let window = duration - release_start;
            self.sustain * (1.0 - (t - release_start) / window)
        }
    }

    /// Generates the envelope curve for a fixed duration.
    pub fn curve(&self, duration: f64, sample_rate: f64) -> Vec<f64> {
        let num_samples = (duration * sample_rate).round().max(0.0) as usize;
        (0..num_samples)
            .map(|i| self.amplitude_at(i as f64 / sample_rate, duration))
            .collect()
    }
}
