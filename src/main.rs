//! teamcsv: Team Roster CSV to JSON CLI Tool
//!
//! Converts a team members spreadsheet export into the JSON array the
//! website's team page is built from.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use teamcsv::cli::{
    discover, run_convert, select_input_file, CandidateSource, Cli, DirectoryScan, Discovery,
};
use teamcsv::utils::{print_banner, print_candidates, print_completion, print_error, print_success};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}", e));
            print_error("Conversion failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let input = match cli.input() {
        Some(input) => input.clone(),
        None => discover_input(cli)?,
    };
    let output = cli.output_path_for(&input);

    run_convert(&input, &output, &cli.convert_options(), cli.verbose)?;

    print_completion(&output);
    Ok(())
}

/// Find an input file in the search directories, asking when several match
fn discover_input(cli: &Cli) -> Result<PathBuf> {
    let scan = DirectoryScan::new(cli.search_dirs());

    match discover(&scan)? {
        Discovery::Found(path) => {
            print_success(&format!("Found CSV file: {}", path.display()));
            Ok(path)
        }
        Discovery::None => {
            let dirs: Vec<String> = scan
                .locations()
                .iter()
                .map(|d| d.display().to_string())
                .collect();
            anyhow::bail!(
                "No CSV file found!\nUsage: teamcsv <path_to_csv_file>\nOr place a CSV file in: {}",
                dirs.join(", ")
            )
        }
        Discovery::Ambiguous(candidates) => {
            print_candidates(&candidates);
            if cli.no_confirm {
                anyhow::bail!(
                    "{} CSV files found; pass the one to convert as an argument",
                    candidates.len()
                );
            }
            select_input_file(&candidates)?
                .ok_or_else(|| anyhow::anyhow!("No CSV file selected"))
        }
    }
}
