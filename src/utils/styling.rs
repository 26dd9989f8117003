//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
pub static PAGE: Emoji<'_, '_> = Emoji("📄 ", "");
pub static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[x] ");

/// Print the application header
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("🔄 Team Members CSV to JSON Converter").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the input/output card
pub fn print_paths(input: &Path, output: &Path, policy: &str) {
    println!("    {} Input CSV:   {}", FOLDER, style(truncate_path(input, 60)).dim());
    println!("    {} Output JSON: {}", PAGE, style(truncate_path(output, 60)).dim());
    println!("    {} Policy:      {}", CHART, style(policy).yellow());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning (skipped rows and similar)
pub fn print_warning(message: &str) {
    println!("    {}{}", WARN, style(message).yellow());
}

/// Print an error to stderr
pub fn print_error(message: &str) {
    eprintln!("    {}{}", CROSS, style(message).red().bold());
}

/// Print a list of candidate files
pub fn print_candidates(paths: &[std::path::PathBuf]) {
    println!("    {} Found CSV files:", SEARCH);
    for (i, path) in paths.iter().enumerate() {
        println!("      {}. {}", i + 1, path.display());
    }
}

/// Print the final completion message
pub fn print_completion(output: &Path) {
    println!();
    println!(
        "    {} {}",
        SPARKLE,
        style(format!("Conversion complete! Updated {}", output.display()))
            .green()
            .bold()
    );
    println!();
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
