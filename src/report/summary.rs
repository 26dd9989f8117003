//! Conversion summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{describe_delimiter, Conversion, MemberRecord};

/// Counts describing one conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub converted: usize,
    pub skipped_missing_position: usize,
    pub skipped_unnamed: usize,
    pub delimiter: String,
    pub policy: String,
}

impl ConversionSummary {
    pub fn new(conversion: &Conversion, policy: &str) -> Self {
        Self {
            rows_read: conversion.rows_read,
            converted: conversion.members.len(),
            skipped_missing_position: conversion.skipped.len(),
            skipped_unnamed: conversion.unnamed_rows(),
            delimiter: describe_delimiter(conversion.delimiter),
            policy: policy.to_string(),
        }
    }

    /// Build the summary table
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Rows Read"), Cell::new(self.rows_read)]);
        table.add_row(vec![
            Cell::new("⚠️  Skipped (No Position)"),
            Cell::new(self.skipped_missing_position).fg(if self.skipped_missing_position == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("🗑️  Skipped (No Name)"),
            Cell::new(self.skipped_unnamed),
        ]);
        table.add_row(vec![Cell::new("🔣 Delimiter"), Cell::new(&self.delimiter)]);
        table.add_row(vec![Cell::new("📐 Policy"), Cell::new(&self.policy)]);
        table.add_row(vec![
            Cell::new("✅ Members Converted"),
            Cell::new(self.converted)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

/// Print the first member as it appears in the output file
pub fn display_preview(members: &[MemberRecord]) {
    let Some(first) = members.first() else {
        return;
    };
    let Ok(json) = serde_json::to_string_pretty(first) else {
        return;
    };

    println!();
    println!(
        "    {} {}",
        style("📊").cyan(),
        style("Preview of first team member:").white().bold()
    );
    for line in json.lines() {
        println!("    {}", line);
    }
}
