//! Command-line argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::pipeline::{ConversionPolicy, ConvertOptions, DelimiterChoice};

/// teamcsv - Convert a team roster CSV into the JSON array used by the website
#[derive(Parser, Debug)]
#[command(name = "teamcsv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file. If omitted, the search directories are scanned for
    /// roster files and you are asked to pick one when several are found.
    pub input: Option<PathBuf>,

    /// Output JSON path.
    /// Defaults to the input directory with the input name and a '.json' extension
    /// (e.g., team.csv → team.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How rows are validated and ordered.
    /// "strict" skips members without a position and orders by position hierarchy;
    /// "lenient" keeps every named member in input order.
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Strict)]
    pub policy: PolicyArg,

    /// Keep input order even under the strict policy
    #[arg(long, default_value = "false")]
    pub keep_order: bool,

    /// Field separator (a single character, or "tab").
    /// Detected from the start of the file when not given.
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Directory to look for CSV files in when no input is given (repeatable).
    /// Defaults to the current directory.
    #[arg(long = "search-dir")]
    pub search_dirs: Vec<PathBuf>,

    /// Never prompt; fail instead of asking which of several files to use
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// List every converted member
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    Strict,
    Lenient,
}

impl Cli {
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Output path for the given input, honouring an explicit `--output`.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("teamMembers");
            parent.join(format!("{}.json", stem))
        })
    }

    /// Output path derived from `--input`, if one was given.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.input().map(|input| self.output_path_for(input))
    }

    pub fn policy(&self) -> ConversionPolicy {
        let mut policy = match self.policy {
            PolicyArg::Strict => ConversionPolicy::strict(),
            PolicyArg::Lenient => ConversionPolicy::lenient(),
        };
        if self.keep_order {
            policy.sort_by_rank = false;
        }
        policy
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            policy: self.policy(),
            delimiter: self
                .delimiter
                .map_or(DelimiterChoice::Sniff, DelimiterChoice::Fixed),
        }
    }

    /// Directories scanned for input candidates
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        if self.search_dirs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.search_dirs.clone()
        }
    }
}

/// Validator for the delimiter parameter
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && !c.is_ascii_alphanumeric() => match c {
            '"' | '\n' | '\r' | ' ' => Err(format!("'{}' cannot be used as a delimiter", c.escape_default())),
            _ => Ok(c as u8),
        },
        _ => Err(format!(
            "delimiter must be a single ASCII punctuation character or \"tab\", got '{}'",
            s
        )),
    }
}
