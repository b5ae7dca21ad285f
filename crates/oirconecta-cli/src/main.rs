//! OirConecta CLI - Command-line interface for hearing-loss audio simulation
//!
//! This binary provides commands for generating scenario audio assets,
//! simulating hearing-loss degradation, and listing the built-in
//! scenario catalog and severity profiles.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use oirconecta_cli::commands;

/// OirConecta - Hearing-Loss Audio Simulation
#[derive(Parser)]
#[command(name = "oirconecta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the stock offline audio assets as WAV files
    Generate {
        /// Output directory for the generated .wav files
        #[arg(short, long, default_value = "public/audio")]
        out_dir: String,

        /// Base seed for deterministic synthesis
        #[arg(long, default_value = "42")]
        seed: u32,

        /// Duration of each asset in seconds
        #[arg(long, default_value = "3.0")]
        duration: f64,

        /// Output sample rate in Hz
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render one scenario through a hearing-loss profile
    Simulate {
        /// Scenario id (see `oirconecta scenarios`)
        #[arg(short, long)]
        scenario: String,

        /// Severity category (normal, leve, moderada, moderadamente_severa, severa, profunda)
        #[arg(short, long, default_value = "normal")]
        category: String,

        /// Output WAV file path
        #[arg(short, long)]
        out: String,

        /// Seed for voice selection and fallback synthesis
        #[arg(long, default_value = "42")]
        seed: u32,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in scenarios
    Scenarios {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the hearing-loss severity profiles
    Profiles {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            seed,
            duration,
            sample_rate,
            json,
        } => commands::generate::run(&out_dir, seed, duration, sample_rate, json),
        Commands::Simulate {
            scenario,
            category,
            out,
            seed,
            json,
        } => commands::simulate::run(&scenario, &category, &out, seed, json),
        Commands::Scenarios { json } => commands::scenarios::run(json),
        Commands::Profiles { json } => commands::profiles::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parses_simulate() {
        let cli = Cli::try_parse_from([
            "oirconecta",
            "simulate",
            "--scenario",
            "te_amo",
            "--category",
            "severa",
            "--out",
            "out.wav",
        ])
        .unwrap();

        match cli.command {
            Commands::Simulate {
                scenario,
                category,
                out,
                seed,
                json,
            } => {
                assert_eq!(scenario, "te_amo");
                assert_eq!(category, "severa");
                assert_eq!(out, "out.wav");
                assert_eq!(seed, 42);
                assert!(!json);
            }
            _ => panic!("expected simulate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["oirconecta", "generate"]).unwrap();

        match cli.command {
            Commands::Generate {
                out_dir,
                seed,
                duration,
                sample_rate,
                json,
            } => {
                assert_eq!(out_dir, "public/audio");
                assert_eq!(seed, 42);
                assert_eq!(duration, 3.0);
                assert_eq!(sample_rate, 44100);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_listing_commands() {
        let cli = Cli::try_parse_from(["oirconecta", "scenarios", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Scenarios { json: true }));

        let cli = Cli::try_parse_from(["oirconecta", "profiles"]).unwrap();
        assert!(matches!(cli.command, Commands::Profiles { json: false }));
    }

    #[test]
    fn test_cli_rejects_simulate_without_out() {
        assert!(Cli::try_parse_from(["oirconecta", "simulate", "--scenario", "te_amo"]).is_err());
    }
}
