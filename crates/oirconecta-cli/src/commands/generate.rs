//! Offline asset generation command
//!
//! Renders the stock scenario assets as deterministic WAV files.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use oirconecta_audio::generate::{builtin_entries, OfflineGenerator};

/// Run offline generation
pub fn run(
    out_dir: &str,
    seed: u32,
    duration: f64,
    sample_rate: u32,
    json: bool,
) -> Result<ExitCode> {
    let generator = OfflineGenerator {
        sample_rate,
        duration_sec: duration,
        seed,
    };
    let entries = builtin_entries();

    if !json {
        println!("Generating {} audio assets...", entries.len());
        println!("Output directory: {}", out_dir);
    }

    let start = Instant::now();
    let assets = generator.generate_all(&entries, Path::new(out_dir))?;
    let elapsed = start.elapsed();

    if json {
        let report: Vec<_> = assets
            .iter()
            .map(|a| {
                serde_json::json!({
                    "scenario_id": a.scenario_id,
                    "path": a.path,
                    "bytes": a.bytes,
                    "pcm_hash": a.pcm_hash,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "seed": seed,
                "sample_rate": sample_rate,
                "duration_seconds": duration,
                "assets": report,
            }))?
        );
        return Ok(ExitCode::SUCCESS);
    }

    for asset in &assets {
        println!(
            "  {} {} {} ({} bytes)",
            "✓".green().bold(),
            asset.scenario_id,
            "•".dimmed(),
            asset.bytes
        );
        println!("    pcm hash: {}", asset.pcm_hash.dimmed());
    }

    println!(
        "\n{} {} assets in {:.1}s",
        "Generated".green().bold(),
        assets.len(),
        elapsed.as_secs_f64()
    );

    Ok(ExitCode::SUCCESS)
}
