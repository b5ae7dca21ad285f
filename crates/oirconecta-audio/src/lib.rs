//! OirConecta Audio Pipeline
//!
//! This crate implements the audio side of OirConecta, a hearing-loss
//! awareness tool: it synthesizes spoken-Spanish scenario audio and
//! degrades it through clinically-shaped effect chains so normal-hearing
//! listeners can experience how different severities of hearing loss
//! sound.
//!
//! # Overview
//!
//! The pipeline has two halves:
//!
//! - **Capture/synthesis** - Scripted dialogue captured through a TTS
//!   engine ([`capture`]), or fully deterministic voice-like assets
//!   synthesized offline ([`voice`], [`generate`]).
//! - **Degradation** - A per-severity effect chain of lowpass filter,
//!   dynamics compressor, distortion, and output gain ([`profile`],
//!   [`effects`]), applied offline to buffers or exported as stage
//!   descriptors for a live playback graph.
//!
//! # Determinism
//!
//! Offline synthesis is deterministic. Given the same seed, the output
//! WAV is byte-identical across runs (on the same platform). The crate
//! uses PCG32 for all random number generation, with per-component
//! seeds derived via BLAKE3 hashing.
//!
//! # Example
//!
//! ```ignore
//! use oirconecta_audio::generate::{builtin_entries, OfflineGenerator};
//!
//! let generator = OfflineGenerator::default();
//! let assets = generator.generate_all(&builtin_entries(), "public/audio".as_ref())?;
//! for asset in &assets {
//!     println!("{}: {}", asset.scenario_id, asset.pcm_hash);
//! }
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - Scenario rendering and offline asset generation
//! - [`buffer`] - Mono sample buffers
//! - [`capture`] - TTS capture with timeout and fallback
//! - [`effects`] - Profile-keyed effect chains
//! - [`envelope`] - ADSR envelope
//! - [`filter`] - Biquad lowpass filter
//! - [`profile`] - Hearing-loss severity profiles
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`scenario`] - Built-in dialogue catalog
//! - [`session`] - Live playback session management
//! - [`voice`] - Harmonic voice synthesis
//! - [`wav`] - Deterministic WAV file writer

pub mod buffer;
pub mod capture;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod generate;
pub mod profile;
pub mod rng;
pub mod scenario;
pub mod session;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use error::{AudioError, AudioResult};
pub use generate::{render_scenario, OfflineGenerator, RenderOutcome};
pub use profile::{profile_for, HearingLossCategory, HearingLossProfile};
pub use scenario::ScenarioCatalog;
pub use wav::WavResult;
