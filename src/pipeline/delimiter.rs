//! Field separator detection for roster CSV files

/// Number of leading characters inspected when sniffing the separator
pub const SNIFF_SAMPLE_CHARS: usize = 1024;

/// Separators recognised by the sniffer, in tie-break order
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Separator used when nothing better can be determined
pub const DEFAULT_DELIMITER: u8 = b',';

/// How the field separator is chosen for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterChoice {
    /// Detect the separator from the start of the file
    #[default]
    Sniff,
    /// Always use this separator
    Fixed(u8),
}

impl DelimiterChoice {
    /// Resolve the separator to use for `text`
    pub fn resolve(self, text: &str) -> u8 {
        match self {
            DelimiterChoice::Sniff => sniff_delimiter(text),
            DelimiterChoice::Fixed(delimiter) => delimiter,
        }
    }
}

/// Guess the field separator from the first [`SNIFF_SAMPLE_CHARS`] characters.
///
/// A candidate wins when it occurs the same, non-zero number of times in every
/// sampled record. Otherwise the candidate seen most often in the header is
/// used, and a comma when no candidate appears at all. Separators inside
/// double-quoted fields are not counted.
pub fn sniff_delimiter(text: &str) -> u8 {
    let sample_end = text
        .char_indices()
        .nth(SNIFF_SAMPLE_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let truncated = sample_end < text.len();

    let mut records = record_counts(&text[..sample_end]);
    // The last record of a cut sample is usually incomplete
    if truncated && records.len() > 1 {
        records.pop();
    }

    let Some(header) = records.first() else {
        return DEFAULT_DELIMITER;
    };

    for (idx, &candidate) in CANDIDATE_DELIMITERS.iter().enumerate() {
        let expected = header[idx];
        if expected > 0 && records.iter().all(|counts| counts[idx] == expected) {
            return candidate;
        }
    }

    // Ties keep the earlier candidate
    let mut best: Option<(usize, usize)> = None;
    for (idx, &count) in header.iter().enumerate() {
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((idx, count));
        }
    }
    best.map(|(idx, _)| CANDIDATE_DELIMITERS[idx])
        .unwrap_or(DEFAULT_DELIMITER)
}

/// Count candidate separators per record, respecting double quotes.
/// Blank records are ignored.
fn record_counts(sample: &str) -> Vec<[usize; CANDIDATE_DELIMITERS.len()]> {
    let mut records = Vec::new();
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;
    let mut blank = true;

    for ch in sample.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                blank = false;
            }
            '\n' if !in_quotes => {
                if !blank {
                    records.push(counts);
                }
                counts = [0; CANDIDATE_DELIMITERS.len()];
                blank = true;
            }
            '\r' => {}
            _ => {
                if !in_quotes {
                    if let Some(idx) = CANDIDATE_DELIMITERS
                        .iter()
                        .position(|&c| c as char == ch)
                    {
                        counts[idx] += 1;
                    }
                }
                if !ch.is_whitespace() {
                    blank = false;
                }
            }
        }
    }
    if !blank {
        records.push(counts);
    }

    records
}

/// Printable name for a separator byte
pub fn describe_delimiter(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "tab".to_string(),
        b',' => "comma".to_string(),
        b';' => "semicolon".to_string(),
        b'|' => "pipe".to_string(),
        other => format!("'{}'", other as char),
    }
}
