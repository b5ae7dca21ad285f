//! WAV file generation result type.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::encode;
use super::writer::samples_to_pcm16;

/// Result of WAV file generation.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer into a WavResult.
    pub fn from_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let pcm = samples_to_pcm16(buffer.samples());
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = encode(buffer)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
