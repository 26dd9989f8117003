//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Header used by most roster fixtures
pub const ROSTER_HEADER: &str = "name,position,image,email,linkedin,instagram,facebook";

/// A small roster covering defaults, social links and unranked positions
///
/// - Jane Doe: no image, bare LinkedIn URL
/// - Ravi Kumar: explicit image, schemed Instagram URL, email only social
/// - Zoë Brandt: no social links at all
/// - Blank name row: must be dropped silently
/// - Sam Lee: no position
pub fn sample_roster() -> String {
    [
        ROSTER_HEADER,
        "Jane Doe,Executive,,jane@example.com,linkedin.com/in/jd,,",
        "Ravi Kumar,Overall Coordinator,/img/team/ravi.png,ravi@example.com,,https://instagram.com/ravi,",
        "Zoë Brandt,Treasurer,,,,,",
        ",Coordinator,,ghost@example.com,,,",
        "Sam Lee,,,sam@example.com,,,facebook.com/sam",
    ]
    .join("\n")
        + "\n"
}

/// Create a temporary directory containing `name` with `contents`
pub fn create_temp_csv(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join(name);
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Read and parse a JSON output file
pub fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Names of the members in an output document, in order
pub fn member_names(doc: &Value) -> Vec<String> {
    doc.as_array()
        .expect("output should be a JSON array")
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}
