//! Roster conversion: rows in, ordered member records out

use std::path::Path;

use super::delimiter::DelimiterChoice;
use super::error::ConvertError;
use super::loader::{parse_roster, read_roster_text, RawRow, RosterSheet};
use super::member::{columns, MemberRecord, Social};
use super::policy::{sort_by_position_rank, ConversionPolicy, MissingPosition};
use super::writer::{render_json, write_atomic};

/// Settings for a single conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub policy: ConversionPolicy,
    pub delimiter: DelimiterChoice,
}

/// Why a named row was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingPosition,
}

/// A row with a name that did not produce a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// File row number (header is row 1)
    pub row: usize,
    pub name: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            SkipReason::MissingPosition => {
                write!(f, "Row {}: No position for {}, skipping", self.row, self.name)
            }
        }
    }
}

/// Result of converting a roster
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Output records, in output order
    pub members: Vec<MemberRecord>,
    /// Named rows dropped by the policy, in input order
    pub skipped: Vec<SkippedRow>,
    /// Data rows read, including rows without a name
    pub rows_read: usize,
    /// Header names as found in the file (trimmed)
    pub columns: Vec<String>,
    /// Separator used to split fields
    pub delimiter: u8,
}

impl Conversion {
    /// Rows dropped silently because they had no name
    pub fn unnamed_rows(&self) -> usize {
        self.rows_read - self.members.len() - self.skipped.len()
    }

    pub fn has_name_column(&self) -> bool {
        self.columns.iter().any(|c| c == columns::NAME)
    }
}

enum RowOutcome {
    Member(MemberRecord),
    Skipped(SkippedRow),
    Unnamed,
}

/// Convert the CSV at `input` and write the JSON array to `output`.
///
/// Nothing is written unless the whole conversion succeeds; an existing
/// `output` is replaced atomically.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let text = read_roster_text(input)?;
    let conversion = convert_text(&text, options)?;
    let json = render_json(&conversion.members)?;
    write_atomic(output, &json)?;
    Ok(conversion)
}

/// Convert already decoded CSV text without touching the filesystem
pub fn convert_text(text: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let delimiter = options.delimiter.resolve(text);
    let sheet = parse_roster(text, delimiter)?;
    Ok(convert_sheet(sheet, delimiter, &options.policy))
}

fn convert_sheet(sheet: RosterSheet, delimiter: u8, policy: &ConversionPolicy) -> Conversion {
    let mut conversion = Conversion {
        rows_read: sheet.rows.len(),
        columns: sheet.columns,
        delimiter,
        ..Default::default()
    };

    for row in &sheet.rows {
        match convert_row(row, policy) {
            RowOutcome::Member(member) => conversion.members.push(member),
            RowOutcome::Skipped(skip) => conversion.skipped.push(skip),
            RowOutcome::Unnamed => {}
        }
    }

    if policy.sort_by_rank {
        sort_by_position_rank(&mut conversion.members);
    }

    conversion
}

fn convert_row(row: &RawRow, policy: &ConversionPolicy) -> RowOutcome {
    let name = row.get(columns::NAME).trim();
    if name.is_empty() {
        return RowOutcome::Unnamed;
    }

    let position = row.get(columns::POSITION).trim();
    if position.is_empty() && policy.missing_position == MissingPosition::SkipWithWarning {
        return RowOutcome::Skipped(SkippedRow {
            row: row.number,
            name: name.to_string(),
            reason: SkipReason::MissingPosition,
        });
    }

    let social = Social::from_cells(|column| row.get(column));
    RowOutcome::Member(MemberRecord::new(
        name.to_string(),
        position.to_string(),
        row.get(columns::IMAGE),
        social,
    ))
}
