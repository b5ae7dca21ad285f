//! Mono sample buffers.
//!
//! Every stage of the pipeline produces and consumes [`SampleBuffer`]s.
//! Samples are clamped to [-1, 1] on construction, so a buffer in hand
//! always satisfies the range invariant. Concatenation allocates a new
//! buffer; inputs are never mutated.

use crate::error::{AudioError, AudioResult};

/// An immutable mono buffer of audio samples in [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    samples: Vec<f64>,
}

impl SampleBuffer {
    /// Creates a buffer, clamping every sample to [-1, 1].
    ///
    /// Non-finite samples are flushed to 0.
    pub fn from_samples(sample_rate: u32, samples: Vec<f64>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| if s.is_finite() { s.clamp(-1.0, 1.0) } else { 0.0 })
            .collect();
        Self {
            sample_rate,
            samples,
        }
    }

    /// Creates a silent buffer of the given duration.
    pub fn silence(sample_rate: u32, duration_sec: f64) -> Self {
        let num_samples = (duration_sec * sample_rate as f64).round().max(0.0) as usize;
        Self {
            sample_rate,
            samples: vec![0.0; num_samples],
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The samples, read-only.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the buffer, returning the raw samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Concatenates buffers with a silence gap between consecutive parts.
    ///
    /// All parts must share one sample rate. Produces a new buffer; the
    /// inputs are left untouched.
    pub fn concat_with_gaps(parts: &[SampleBuffer], gap_sec: f64) -> AudioResult<SampleBuffer> {
        let first = parts.first().ok_or_else(|| {
            AudioError::invalid_param("parts", "cannot concatenate zero buffers")
        })?;
        let sample_rate = first.sample_rate;

        for part in parts {
            if part.sample_rate != sample_rate {
                return Err(AudioError::invalid_param(
                    "parts",
                    format!(
                        "sample rate mismatch: {} Hz vs {} Hz",
                        part.sample_rate, sample_rate
                    ),
                ));
            }
        }

        let gap_samples = (gap_sec * sample_rate as f64).round().max(0.0) as usize;
        let total: usize = parts.iter().map(|p| p.len()).sum::<usize>()
            + gap_samples * (parts.len() - 1);

        let mut samples = Vec::with_capacity(total);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                samples.extend(std::iter::repeat(0.0).take(gap_samples));
            }
            samples.extend_from_slice(&part.samples);
        }

        // Parts already satisfy the clamp invariant.
        Ok(SampleBuffer {
            sample_rate,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamps_on_construction() {
        let buffer = SampleBuffer::from_samples(44100, vec![1.5, -2.0, 0.25, f64::NAN]);
        assert_eq!(buffer.samples(), &[1.0, -1.0, 0.25, 0.0]);
    }

    #[test]
    fn test_silence_length() {
        let buffer = SampleBuffer::silence(44100, 0.5);
        assert_eq!(buffer.len(), 22050);
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_concat_with_gaps() {
        let a = SampleBuffer::from_samples(1000, vec![0.1; 100]);
        let b = SampleBuffer::from_samples(1000, vec![0.2; 50]);

        let combined = SampleBuffer::concat_with_gaps(&[a.clone(), b.clone()], 0.5).unwrap();
        // 100 + 500 gap + 50
        assert_eq!(combined.len(), 650);
        assert_eq!(combined.samples()[0], 0.1);
        assert_eq!(combined.samples()[100], 0.0);
        assert_eq!(combined.samples()[600], 0.2);

        // Inputs unchanged
        assert_eq!(a.len(), 100);
        assert_eq!(b.len(), 50);
    }

    #[test]
    fn test_concat_rejects_rate_mismatch() {
        let a = SampleBuffer::silence(44100, 0.1);
        let b = SampleBuffer::silence(22050, 0.1);
        let err = SampleBuffer::concat_with_gaps(&[a, b], 0.0).unwrap_err();
        assert!(err.to_string().contains("sample rate mismatch"));
    }

    #[test]
    fn test_concat_rejects_empty_list() {
        assert!(SampleBuffer::concat_with_gaps(&[], 0.5).is_err());
    }
}
