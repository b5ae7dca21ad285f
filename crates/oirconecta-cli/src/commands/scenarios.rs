//! Scenario listing command

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use oirconecta_audio::ScenarioCatalog;

/// Run scenario listing
pub fn run(json: bool) -> Result<ExitCode> {
    let catalog = ScenarioCatalog::builtin();

    if json {
        let listing: Vec<_> = catalog
            .scenario_ids()
            .map(|id| {
                let scenario = catalog.lookup(id).expect("id came from the catalog");
                let utterances: Vec<_> = scenario
                    .utterances
                    .iter()
                    .map(|u| {
                        serde_json::json!({
                            "text": u.text,
                            "voice": u.voice,
                            "rate": u.rate,
                        })
                    })
                    .collect();
                serde_json::json!({ "id": id, "utterances": utterances })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} built-in scenarios:\n", catalog.len());
    for id in catalog.scenario_ids() {
        let scenario = catalog.lookup(id).expect("id came from the catalog");
        println!(
            "  {} {}",
            id.cyan().bold(),
            format!("({} utterances)", scenario.utterances.len()).dimmed()
        );
        if let Some(first) = scenario.utterances.first() {
            println!("    \"{}\"", first.text.dimmed());
        }
    }

    Ok(ExitCode::SUCCESS)
}
