//! teamcsv: Team Roster Conversion Library
//!
//! Turns a spreadsheet export of team members into the JSON array the
//! website's team page renders.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
