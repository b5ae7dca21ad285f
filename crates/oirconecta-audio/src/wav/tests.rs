use pretty_assertions::assert_eq;

use super::*;
use crate::buffer::SampleBuffer;
use crate::error::AudioError;

fn tone_buffer(rate: u32, duration: f64, freq: f64) -> SampleBuffer {
    let n = (duration * rate as f64).round() as usize;
    let samples: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / rate as f64;
            0.5 * (2.0 * std::f64::consts::PI * freq * t).sin()
        })
        .collect();
    SampleBuffer::from_samples(rate, samples)
}

#[test]
fn header_layout() {
    let buffer = tone_buffer(44_100, 0.01, 440.0);
    let wav = encode(&buffer).unwrap();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(&wav[36..40], b"data");

    // PCM format, mono, 16-bit
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);

    let sample_rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
    assert_eq!(sample_rate, 44_100);

    let byte_rate = u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]);
    assert_eq!(byte_rate, 44_100 * 2);

    let block_align = u16::from_le_bytes([wav[32], wav[33]]);
    assert_eq!(block_align, 2);
}

#[test]
fn file_size_matches_sample_count() {
    let buffer = tone_buffer(22_050, 0.5, 220.0);
    let wav = encode(&buffer).unwrap();
    assert_eq!(wav.len(), 44 + buffer.len() * 2);

    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
    assert_eq!(data_size, buffer.len() * 2);

    let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]) as usize;
    assert_eq!(riff_size, wav.len() - 8);
}

#[test]
fn empty_buffer_rejected() {
    let buffer = SampleBuffer::from_samples(44_100, vec![]);
    let err = encode(&buffer).unwrap_err();
    assert!(matches!(err, AudioError::EmptyBuffer));
}

#[test]
fn pcm16_conversion_clips_and_rounds() {
    let samples = vec![0.0, 1.0, -1.0, 1.5, -1.5, 0.5];
    let pcm = samples_to_pcm16(&samples);
    assert_eq!(pcm.len(), 12);

    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    assert_eq!(values, vec![0, 32767, -32767, 32767, -32767, 16384]);
}

#[test]
fn round_trip_quantization_error_bounded() {
    let buffer = tone_buffer(8_000, 0.25, 440.0);
    let pcm = samples_to_pcm16(buffer.samples());
    let decoded = pcm16_to_samples(&pcm);

    assert_eq!(decoded.len(), buffer.len());
    let max_err = 1.0 / 32767.0;
    for (orig, back) in buffer.samples().iter().zip(&decoded) {
        assert!(
            (orig - back).abs() <= max_err,
            "quantization error {} exceeds bound",
            (orig - back).abs()
        );
    }
}

#[test]
fn encoding_is_deterministic() {
    let a = tone_buffer(44_100, 0.1, 330.0);
    let b = tone_buffer(44_100, 0.1, 330.0);
    assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
}

#[test]
fn pcm_hash_extraction() {
    let buffer = tone_buffer(44_100, 0.05, 440.0);
    let wav = encode(&buffer).unwrap();

    let pcm = extract_pcm_data(&wav).unwrap();
    assert_eq!(pcm.len(), buffer.len() * 2);

    let hash = compute_pcm_hash(&wav).unwrap();
    let result = WavResult::from_buffer(&buffer).unwrap();
    assert_eq!(hash, result.pcm_hash);
}

#[test]
fn pcm_hash_ignores_header_differences() {
    let a = tone_buffer(44_100, 0.05, 440.0);
    let b = tone_buffer(22_050, 0.1, 220.0);
    let pcm_a = samples_to_pcm16(a.samples());
    let pcm_b = samples_to_pcm16(b.samples());
    // Same payload wrapped at different rates hashes the same.
    let wav_a = write_wav_to_vec(&WavFormat::mono(44_100), &pcm_a);
    let wav_a2 = write_wav_to_vec(&WavFormat::mono(22_050), &pcm_a);
    assert_eq!(compute_pcm_hash(&wav_a), compute_pcm_hash(&wav_a2));

    let wav_b = write_wav_to_vec(&WavFormat::mono(44_100), &pcm_b);
    assert_ne!(compute_pcm_hash(&wav_a), compute_pcm_hash(&wav_b));
}

#[test]
fn extract_rejects_garbage() {
    assert!(extract_pcm_data(b"not a wav").is_none());
    assert!(extract_pcm_data(&[0u8; 44]).is_none());
}

#[test]
fn write_wav_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");

    let first = tone_buffer(44_100, 0.02, 440.0);
    write_wav_file(&path, &first).unwrap();
    let second = tone_buffer(44_100, 0.04, 440.0);
    write_wav_file(&path, &second).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk.len(), 44 + second.len() * 2);
}

#[test]
fn wav_result_duration() {
    let buffer = tone_buffer(44_100, 2.0, 440.0);
    let result = WavResult::from_buffer(&buffer).unwrap();
    assert!((result.duration_seconds() - 2.0).abs() < 1e-4);
    assert_eq!(result.sample_rate, 44_100);
    assert_eq!(result.num_samples, 88_200);
}
