//! Locating an input CSV when none is given on the command line

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File names checked first in every search directory, in priority order
pub const WELL_KNOWN_NAMES: [&str; 3] = ["team.csv", "team_members.csv", "events.csv"];

/// Something that can list candidate input files
pub trait CandidateSource {
    fn candidates(&self) -> Result<Vec<PathBuf>>;

    /// Directories the candidates come from, for usage messages
    fn locations(&self) -> Vec<PathBuf>;
}

/// Scans directories for well-known roster names, then any other `*.csv`
#[derive(Debug, Clone)]
pub struct DirectoryScan {
    search_dirs: Vec<PathBuf>,
    well_known: Vec<String>,
}

impl DirectoryScan {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            well_known: WELL_KNOWN_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_well_known(mut self, names: Vec<String>) -> Self {
        self.well_known = names;
        self
    }

    fn scan_dir(&self, dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for name in &self.well_known {
            let path = dir.join(name);
            if path.is_file() {
                push_unique(found, path);
            }
        }

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?;
        let mut others: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_csv(path))
            .collect();
        others.sort();

        for path in others {
            push_unique(found, path);
        }
        Ok(())
    }
}

impl CandidateSource for DirectoryScan {
    fn candidates(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for dir in &self.search_dirs {
            self.scan_dir(dir, &mut found)?;
        }
        Ok(found)
    }

    fn locations(&self) -> Vec<PathBuf> {
        self.search_dirs.clone()
    }
}

/// Outcome of looking for an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    None,
    Found(PathBuf),
    Ambiguous(Vec<PathBuf>),
}

pub fn discover(source: &dyn CandidateSource) -> Result<Discovery> {
    let mut candidates = source.candidates()?;
    Ok(match candidates.len() {
        0 => Discovery::None,
        1 => Discovery::Found(candidates.remove(0)),
        _ => Discovery::Ambiguous(candidates),
    })
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn push_unique(found: &mut Vec<PathBuf>, path: PathBuf) {
    // Compare canonical forms so "./team.csv" and "team.csv" collapse
    let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
    let seen = found
        .iter()
        .any(|p| std::fs::canonicalize(p).unwrap_or_else(|_| p.clone()) == key);
    if !seen {
        found.push(path);
    }
}
