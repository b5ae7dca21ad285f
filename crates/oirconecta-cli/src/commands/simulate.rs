//! Scenario simulation command
//!
//! Renders one scenario through a hearing-loss profile and writes the
//! result as a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::sync::mpsc::Sender;

use oirconecta_audio::capture::{CaptureResult, SpeechCapture, TtsEngine, VoiceInfo};
use oirconecta_audio::profile::{profile_for, HearingLossCategory};
use oirconecta_audio::scenario::ScenarioCatalog;
use oirconecta_audio::{render_scenario, wav};

/// Engine stand-in for environments without a speech capture path.
///
/// Every utterance resolves to the deterministic tone fallback, which
/// keeps `simulate` output reproducible on any machine.
struct PlaceholderEngine;

impl TtsEngine for PlaceholderEngine {
    fn list_voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn speak(
        &mut self,
        _text: &str,
        _voice: Option<&VoiceInfo>,
        _rate: f64,
        done: Sender<CaptureResult>,
    ) {
        let _ = done.send(CaptureResult::Failed(
            "no speech capture path available".to_string(),
        ));
    }
}

/// Run scenario simulation
pub fn run(scenario: &str, category: &str, out: &str, seed: u32, json: bool) -> Result<ExitCode> {
    let category = HearingLossCategory::from_lenient(category);
    let profile = profile_for(category);

    let catalog = ScenarioCatalog::builtin();
    let mut capture = SpeechCapture::new(PlaceholderEngine, seed);

    let outcome = render_scenario(&catalog, &mut capture, scenario, category)
        .with_context(|| format!("failed to render scenario '{}'", scenario))?;

    let out_path = Path::new(out);
    wav::write_wav_file(out_path, &outcome.buffer)
        .with_context(|| format!("failed to write {}", out))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "scenario_id": scenario,
                "category": category.as_str(),
                "profile": profile,
                "output": out,
                "duration_seconds": outcome.buffer.duration_seconds(),
                "degraded": outcome.degraded,
                "used_fallback": outcome.used_fallback(),
            }))?
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("Scenario: {}", scenario);
    println!("Profile:  {} ({})", profile.name, profile.range_db_hl);
    println!(
        "  cutoff {} Hz, ratio {}:1, gain {}",
        profile.filter_cutoff_hz, profile.compression_ratio, profile.output_gain
    );

    if outcome.used_fallback() {
        println!(
            "  {} speech capture unavailable, rendered placeholder tones",
            "note:".yellow().bold()
        );
    }
    if outcome.degraded {
        println!(
            "  {} effect chain unavailable, audio passed through unprocessed",
            "warning:".yellow().bold()
        );
    }

    println!(
        "\n{} {} ({:.1}s of audio)",
        "✓ Wrote".green().bold(),
        out,
        outcome.buffer.duration_seconds()
    );

    Ok(ExitCode::SUCCESS)
}
