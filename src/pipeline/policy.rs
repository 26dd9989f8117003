//! Conversion policy: handling of rows without a position and the
//! position-hierarchy ordering of the output.

use super::member::MemberRecord;

/// Rank given to positions missing from [`POSITION_RANKS`]
pub const UNRANKED: u8 = 99;

/// Known positions and their display order (lower comes first)
pub const POSITION_RANKS: [(&str, u8); 6] = [
    ("Overall Coordinator", 1),
    ("Coordinator", 2),
    ("Panel Member", 3),
    ("Convenor", 4),
    ("Convener", 4),
    ("Executive", 5),
];

/// What to do with a row whose `position` is blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPosition {
    /// Keep the row with an empty position
    DefaultEmpty,
    /// Drop the row and report it
    SkipWithWarning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPolicy {
    pub missing_position: MissingPosition,
    pub sort_by_rank: bool,
}

impl ConversionPolicy {
    /// Keep every named member, in input order
    pub fn lenient() -> Self {
        Self {
            missing_position: MissingPosition::DefaultEmpty,
            sort_by_rank: false,
        }
    }

    /// Require a position and order members by the position hierarchy
    pub fn strict() -> Self {
        Self {
            missing_position: MissingPosition::SkipWithWarning,
            sort_by_rank: true,
        }
    }

    pub fn name(&self) -> &'static str {
        match (self.missing_position, self.sort_by_rank) {
            (MissingPosition::SkipWithWarning, true) => "strict",
            (MissingPosition::DefaultEmpty, false) => "lenient",
            (MissingPosition::SkipWithWarning, false) => "strict (input order)",
            (MissingPosition::DefaultEmpty, true) => "lenient (ranked)",
        }
    }
}

impl Default for ConversionPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Rank of a position title; exact, case-sensitive match
pub fn position_rank(position: &str) -> u8 {
    POSITION_RANKS
        .iter()
        .find(|(title, _)| *title == position)
        .map(|&(_, rank)| rank)
        .unwrap_or(UNRANKED)
}

/// Stable sort by position rank; equal ranks keep their input order
pub fn sort_by_position_rank(members: &mut [MemberRecord]) {
    members.sort_by_key(|member| position_rank(&member.position));
}
