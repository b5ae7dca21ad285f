//! Speech capture over an external text-to-speech engine.
//!
//! The engine speaks an utterance and delivers its captured audio
//! through a completion channel. Capture is best-effort: on engine
//! failure or after a fixed timeout the capture falls back to a
//! deterministic three-tone placeholder so the pipeline never stalls.
//! The suspension is a single `recv_timeout` race; whichever side fires
//! first wins and late completions are dropped with the receiver.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::time::Duration;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::buffer::SampleBuffer;
use crate::rng::create_component_rng;
use crate::scenario::Utterance;
use crate::voice::VoiceCategory;

/// Fixed ceiling on how long one utterance may take to capture.
pub const SPEAK_TIMEOUT: Duration = Duration::from_secs(5);

/// Duration of the fallback placeholder buffer in seconds.
pub const FALLBACK_DURATION_SEC: f64 = 3.0;

/// Fallback tone components: (frequency Hz, amplitude).
const FALLBACK_TONES: [(f64, f64); 3] = [(200.0, 0.1), (400.0, 0.05), (800.0, 0.03)];

/// A voice advertised by the TTS engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Engine-specific voice name.
    pub name: String,
    /// BCP 47-ish language tag, e.g. "es-ES".
    pub language: String,
}

/// Completion message delivered by the engine.
#[derive(Debug)]
pub enum CaptureResult {
    /// The spoken audio was captured into a buffer.
    Audio(SampleBuffer),
    /// The engine could not speak or capture.
    Failed(String),
}

/// External text-to-speech capability.
///
/// `speak` must eventually send exactly one [`CaptureResult`] on the
/// completion channel; sends after the timeout are silently dropped.
pub trait TtsEngine {
    /// Lists the voices the engine offers.
    fn list_voices(&self) -> Vec<VoiceInfo>;

    /// Speaks `text` with the given voice and rate, reporting completion
    /// on `done`.
    fn speak(&mut self, text: &str, voice: Option<&VoiceInfo>, rate: f64, done: Sender<CaptureResult>);
}

/// Where a capture outcome's audio came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    /// Real engine audio.
    Captured,
    /// Deterministic placeholder synthesis.
    Fallback,
}

/// Capture state machine. Transitions happen inside `speak` and always
/// settle back to `Idle` before the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Speaking,
    Captured,
    FallbackGenerated,
}

/// Outcome of capturing one utterance. Never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    /// The captured or fallback audio.
    pub buffer: SampleBuffer,
    /// Whether the audio is real or placeholder.
    pub source: CaptureSource,
    /// True when the fallback was forced by the timeout rather than an
    /// explicit engine failure.
    pub timed_out: bool,
}

/// Captures spoken utterances one at a time.
///
/// No two capture operations run concurrently; calls are sequenced by
/// `&mut self`.
pub struct SpeechCapture<E: TtsEngine> {
    engine: E,
    rng: Pcg32,
    timeout: Duration,
    sample_rate: u32,
    state: CaptureState,
}

impl<E: TtsEngine> SpeechCapture<E> {
    /// Creates a capture frontend over an engine.
    ///
    /// The seed pins the gender-voice fallback pick so tests can
    /// reproduce voice selection.
    pub fn new(engine: E, seed: u32) -> Self {
        Self {
            engine,
            rng: create_component_rng(seed, "voice-fallback"),
            timeout: SPEAK_TIMEOUT,
            sample_rate: 44_100,
            state: CaptureState::Idle,
        }
    }

    /// Overrides the capture timeout. Mainly for tests.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current state. Outside of a `speak` call this is always `Idle`.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Gender-indicative name tokens per voice category. A weak,
    /// non-portable heuristic carried over from the host platform's
    /// voice naming.
    fn gender_tokens(category: VoiceCategory) -> [&'static str; 2] {
        match category {
            VoiceCategory::Male => ["male", "hombre"],
            VoiceCategory::Female => ["female", "mujer"],
            VoiceCategory::Child => ["child", "niño"],
        }
    }

    /// Picks a voice: Spanish-language voices first, then a substring
    /// match on gender tokens, then a seeded random Spanish voice.
    fn select_voice(&mut self, category: VoiceCategory) -> Option<VoiceInfo> {
        let spanish: Vec<VoiceInfo> = self
            .engine
            .list_voices()
            .into_iter()
            .filter(|v| v.language.starts_with("es"))
            .collect();
        if spanish.is_empty() {
            return None;
        }

        let tokens = Self::gender_tokens(category);
        if let Some(found) = spanish
            .iter()
            .find(|v| tokens.iter().any(|t| v.name.to_lowercase().contains(t)))
        {
            return Some(found.clone());
        }

        let pick = self.rng.gen_range(0..spanish.len());
        Some(spanish[pick].clone())
    }

    /// Deterministic three-tone placeholder buffer.
    pub fn fallback_buffer(sample_rate: u32) -> SampleBuffer {
        let num_samples = (FALLBACK_DURATION_SEC * sample_rate as f64).round() as usize;
        let two_pi = 2.0 * std::f64::consts::PI;

        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                FALLBACK_TONES
                    .iter()
                    .map(|&(freq, amp)| amp * (two_pi * freq * t).sin())
                    .sum()
            })
            .collect();

        SampleBuffer::from_samples(sample_rate, samples)
    }

    /// Speaks one utterance and returns its audio.
    ///
    /// Suspends until the engine completes or the timeout fires,
    /// whichever comes first. Every failure path resolves to the
    /// fallback buffer; this method never errors.
    pub fn speak(&mut self, utterance: &Utterance) -> CaptureOutcome {
        let voice = self.select_voice(utterance.voice);

        let (tx, rx) = mpsc::channel();
        self.state = CaptureState::Speaking;
        self.engine
            .speak(utterance.text, voice.as_ref(), utterance.rate, tx);

        let outcome = match rx.recv_timeout(self.timeout) {
            Ok(CaptureResult::Audio(buffer)) => {
                self.state = CaptureState::Captured;
                CaptureOutcome {
                    buffer,
                    source: CaptureSource::Captured,
                    timed_out: false,
                }
            }
            Ok(CaptureResult::Failed(_)) | Err(RecvTimeoutError::Disconnected) => {
                self.state = CaptureState::FallbackGenerated;
                CaptureOutcome {
                    buffer: Self::fallback_buffer(self.sample_rate),
                    source: CaptureSource::Fallback,
                    timed_out: false,
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                self.state = CaptureState::FallbackGenerated;
                CaptureOutcome {
                    buffer: Self::fallback_buffer(self.sample_rate),
                    source: CaptureSource::Fallback,
                    timed_out: true,
                }
            }
        };

        // Late completions are ignored: rx is dropped here.
        self.state = CaptureState::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use crate::voice::VoiceSynth;

    /// Engine that replies immediately with synthesized audio.
    struct WorkingEngine {
        voices: Vec<VoiceInfo>,
    }

    impl WorkingEngine {
        fn spanish() -> Self {
            Self {
                voices: vec![
                    VoiceInfo {
                        name: "Monica (mujer)".to_string(),
                        language: "es-ES".to_string(),
                    },
                    VoiceInfo {
                        name: "Diego (hombre)".to_string(),
                        language: "es-MX".to_string(),
                    },
                    VoiceInfo {
                        name: "Samantha".to_string(),
                        language: "en-US".to_string(),
                    },
                ],
            }
        }
    }

    impl TtsEngine for WorkingEngine {
        fn list_voices(&self) -> Vec<VoiceInfo> {
            self.voices.clone()
        }

        fn speak(&mut self, _text: &str, _voice: Option<&VoiceInfo>, _rate: f64, done: Sender<CaptureResult>) {
            let synth = VoiceSynth::for_category(VoiceCategory::Female);
            let mut rng = create_rng(1);
            let buffer = synth.synthesize(0.5, 44100, &mut rng).unwrap();
            done.send(CaptureResult::Audio(buffer)).unwrap();
        }
    }

    /// Engine that always reports failure.
    struct FailingEngine;

    impl TtsEngine for FailingEngine {
        fn list_voices(&self) -> Vec<VoiceInfo> {
            Vec::new()
        }

        fn speak(&mut self, _text: &str, _voice: Option<&VoiceInfo>, _rate: f64, done: Sender<CaptureResult>) {
            done.send(CaptureResult::Failed("capture path absent".to_string()))
                .unwrap();
        }
    }

    /// Engine that never completes, forcing the timeout.
    struct SilentEngine;

    impl TtsEngine for SilentEngine {
        fn list_voices(&self) -> Vec<VoiceInfo> {
            Vec::new()
        }

        fn speak(&mut self, _text: &str, _voice: Option<&VoiceInfo>, _rate: f64, done: Sender<CaptureResult>) {
            // Hold the sender so the channel stays open past the deadline.
            std::mem::forget(done);
        }
    }

    fn test_utterance() -> Utterance {
        Utterance {
            text: "Hola, ¿cómo estás?",
            voice: VoiceCategory::Female,
            rate: 0.9,
        }
    }

    #[test]
    fn test_successful_capture() {
        let mut capture = SpeechCapture::new(WorkingEngine::spanish(), 42);
        let outcome = capture.speak(&test_utterance());

        assert_eq!(outcome.source, CaptureSource::Captured);
        assert!(!outcome.timed_out);
        assert_eq!(outcome.buffer.len(), 22050);
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_engine_failure_falls_back() {
        let mut capture = SpeechCapture::new(FailingEngine, 42);
        let outcome = capture.speak(&test_utterance());

        assert_eq!(outcome.source, CaptureSource::Fallback);
        assert!(!outcome.timed_out);
        assert_eq!(outcome.buffer.len(), 3 * 44100);
    }

    #[test]
    fn test_timeout_falls_back() {
        let mut capture =
            SpeechCapture::new(SilentEngine, 42).with_timeout(Duration::from_millis(20));
        let outcome = capture.speak(&test_utterance());

        assert_eq!(outcome.source, CaptureSource::Fallback);
        assert!(outcome.timed_out);
        assert_eq!(outcome.buffer.len(), 3 * 44100);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let a = SpeechCapture::<FailingEngine>::fallback_buffer(44100);
        let b = SpeechCapture::<FailingEngine>::fallback_buffer(44100);
        assert_eq!(a, b);
        assert_eq!(a.sample_rate(), 44100);
        assert!((a.duration_seconds() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_regardless_of_text() {
        let mut capture = SpeechCapture::new(FailingEngine, 42);
        let a = capture.speak(&test_utterance());
        let b = capture.speak(&Utterance {
            text: "Un texto completamente distinto y mucho más largo que el anterior",
            voice: VoiceCategory::Male,
            rate: 1.1,
        });
        assert_eq!(a.buffer, b.buffer);
    }

    #[test]
    fn test_voice_selection_prefers_gender_token() {
        let mut capture = SpeechCapture::new(WorkingEngine::spanish(), 42);
        let voice = capture.select_voice(VoiceCategory::Male).unwrap();
        assert_eq!(voice.name, "Diego (hombre)");

        let voice = capture.select_voice(VoiceCategory::Female).unwrap();
        assert_eq!(voice.name, "Monica (mujer)");
    }

    #[test]
    fn test_voice_selection_fallback_is_seeded() {
        // No gender token matches ("child"): the pick comes from the
        // seeded RNG and is reproducible.
        let pick1 = SpeechCapture::new(WorkingEngine::spanish(), 7)
            .select_voice(VoiceCategory::Child)
            .unwrap();
        let pick2 = SpeechCapture::new(WorkingEngine::spanish(), 7)
            .select_voice(VoiceCategory::Child)
            .unwrap();
        assert_eq!(pick1, pick2);
        assert!(pick1.language.starts_with("es"));
    }

    #[test]
    fn test_no_spanish_voice_yields_none() {
        let engine = WorkingEngine {
            voices: vec![VoiceInfo {
                name: "Samantha".to_string(),
                language: "en-US".to_string(),
            }],
        };
        let mut capture = SpeechCapture::new(engine, 42);
        assert!(capture.select_voice(VoiceCategory::Female).is_none());
    }
}
