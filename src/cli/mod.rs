//! CLI module - argument parsing, input discovery and interactive prompts

mod args;
pub mod convert;
pub mod discovery;
mod prompts;

pub use args::{Cli, PolicyArg};
pub use convert::run_convert;
pub use discovery::{discover, CandidateSource, DirectoryScan, Discovery};
pub use prompts::*;
