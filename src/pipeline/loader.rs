//! Roster loader: reads the CSV as text and splits it into header-keyed rows

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use encoding_rs::UTF_8;
use polars::prelude::*;

use super::error::{ConvertError, Stage};

/// File row number of the first data row (row 1 is the header)
pub const FIRST_DATA_ROW: usize = 2;

/// One data row, keyed by trimmed header name
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    /// 1-based row number in the file, counting the header
    pub number: usize,
    values: HashMap<String, String>,
}

impl RawRow {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            values: HashMap::new(),
        }
    }

    /// Raw cell value; empty when the column is absent or the cell is blank
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }
}

/// Parsed roster: header names plus rows in file order
#[derive(Debug, Clone, Default)]
pub struct RosterSheet {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RosterSheet {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Read the whole input file and decode it as UTF-8
pub fn read_roster_text(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::from_input_io(path, e))?;
    decode_roster(&bytes, path)
}

/// Decode UTF-8 bytes, dropping a leading byte-order mark.
/// Malformed sequences are an error rather than being replaced.
pub fn decode_roster(bytes: &[u8], path: &Path) -> Result<String, ConvertError> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(ConvertError::failure_msg(
            Stage::Decode,
            format!("CSV file is not valid UTF-8: {}", path.display()),
        ));
    }
    Ok(text.into_owned())
}

/// Parse CSV text into rows using `delimiter`. Every column is read as text.
pub fn parse_roster(text: &str, delimiter: u8) -> Result<RosterSheet, ConvertError> {
    if text.trim().is_empty() {
        return Ok(RosterSheet::default());
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        // 0 rows of inference reads every column as String
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| {
            opts.with_separator(delimiter)
                .with_truncate_ragged_lines(true)
        })
        .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
        .finish()
        .map_err(|e| ConvertError::failure(Stage::Parse, "Failed to parse CSV content", e))?;

    sheet_from_frame(&df)
        .map_err(|e| ConvertError::failure(Stage::Parse, "Failed to read CSV columns", e))
}

fn sheet_from_frame(df: &DataFrame) -> PolarsResult<RosterSheet> {
    let mut rows: Vec<RawRow> = (0..df.height())
        .map(|idx| RawRow::new(idx + FIRST_DATA_ROW))
        .collect();
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let key = column.name().as_str().trim().to_string();
        let values = column.as_materialized_series().str()?;
        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            if let Some(value) = value {
                row.insert(key.as_str(), value);
            }
        }
        columns.push(key);
    }

    Ok(RosterSheet { columns, rows })
}
