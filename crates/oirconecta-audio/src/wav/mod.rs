//! Deterministic WAV encoding.
//!
//! Writes 16-bit PCM mono WAV files with the canonical 44-byte header
//! and no timestamps or variable metadata, so identical buffers always
//! encode to identical bytes. The BLAKE3 hash of the PCM payload is
//! exposed for determinism validation.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};

use std::path::Path;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Encodes a buffer into a complete WAV file byte sequence.
///
/// Fails with `EmptyBuffer` when the buffer holds no samples.
pub fn encode(buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
    if buffer.is_empty() {
        return Err(AudioError::EmptyBuffer);
    }
    let format = WavFormat::mono(buffer.sample_rate());
    let pcm = samples_to_pcm16(buffer.samples());
    Ok(write_wav_to_vec(&format, &pcm))
}

/// Encodes a buffer and writes it to a file, overwriting any existing file.
pub fn write_wav_file(path: &Path, buffer: &SampleBuffer) -> AudioResult<()> {
    let bytes = encode(buffer)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
