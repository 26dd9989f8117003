//! Interactive prompts using dialoguer

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::Select;

/// Ask which of several candidate CSV files to convert.
/// Returns `None` if the user cancels with Esc or q.
pub fn select_input_file(candidates: &[PathBuf]) -> Result<Option<PathBuf>> {
    let items: Vec<String> = candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    let choice = Select::new()
        .with_prompt("Multiple CSV files found. Select CSV file")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|idx| candidates[idx].clone()))
}
