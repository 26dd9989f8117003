//! Roster conversion command with terminal reporting

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::pipeline::{
    convert, describe_delimiter, Conversion, ConvertOptions, MissingPosition,
};
use crate::report::{display_preview, ConversionSummary};
use crate::utils::{
    abandon, create_spinner, finish_with_success, print_info, print_paths, print_success,
    print_warning,
};

/// Run the CSV to JSON conversion and report on it
///
/// # Arguments
/// * `input` - Path to the roster CSV
/// * `output` - Path of the JSON file to create or replace
/// * `options` - Policy and delimiter settings
/// * `verbose` - Also list every converted member
///
/// Nothing is written to `output` when the conversion fails.
pub fn run_convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    verbose: bool,
) -> Result<Conversion> {
    let policy = options.policy.name();
    print_paths(input, output, policy);

    let spinner = create_spinner("Converting CSV to JSON...");
    let conversion = match convert(input, output, options) {
        Ok(conversion) => conversion,
        Err(e) => {
            abandon(&spinner);
            return Err(e.into());
        }
    };
    finish_with_success(
        &spinner,
        &format!(
            "Parsed {} row(s) ({}-separated)",
            conversion.rows_read,
            describe_delimiter(conversion.delimiter)
        ),
    );

    if !conversion.has_name_column() {
        print_warning("No 'name' column in the CSV header; no members can be converted");
    }

    for skip in &conversion.skipped {
        print_warning(&skip.to_string());
    }

    if verbose {
        for member in &conversion.members {
            println!(
                "      {} Added: {} - {}",
                style("✓").green(),
                member.name,
                if member.position.is_empty() {
                    "(no position)"
                } else {
                    member.position.as_str()
                }
            );
        }
    }

    ConversionSummary::new(&conversion, policy).display();

    println!();
    print_success(&format!(
        "Successfully converted {} team members",
        conversion.members.len()
    ));
    if options.policy.missing_position == MissingPosition::SkipWithWarning
        && !conversion.skipped.is_empty()
    {
        print_info(&format!(
            "{} member(s) without a position were left out",
            conversion.skipped.len()
        ));
    }

    display_preview(&conversion.members);

    Ok(conversion)
}
