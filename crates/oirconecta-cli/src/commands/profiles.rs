//! Profile listing command

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use oirconecta_audio::profile::all_profiles;

/// Run profile listing
pub fn run(json: bool) -> Result<ExitCode> {
    let profiles = all_profiles();

    if json {
        println!("{}", serde_json::to_string_pretty(profiles)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Hearing-loss severity profiles:\n");
    for profile in profiles {
        println!(
            "  {} {} {}",
            profile.category.as_str().cyan().bold(),
            profile.name,
            format!("({})", profile.range_db_hl).dimmed()
        );
        println!(
            "    cutoff {} Hz, ratio {}:1, gain {}, distortion {}",
            profile.filter_cutoff_hz,
            profile.compression_ratio,
            profile.output_gain,
            profile.distortion
        );
        println!("    {}", profile.description.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}
