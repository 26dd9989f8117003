//! Pipeline module - reads the roster, normalises members and writes the JSON

pub mod converter;
pub mod delimiter;
pub mod error;
pub mod loader;
pub mod member;
pub mod policy;
pub mod writer;

pub use converter::*;
pub use delimiter::{describe_delimiter, sniff_delimiter, DelimiterChoice};
pub use error::{ConvertError, Stage};
pub use loader::{parse_roster, read_roster_text, RawRow, RosterSheet};
pub use member::*;
pub use policy::*;
pub use writer::{render_json, write_atomic};
