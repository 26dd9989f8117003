//! Error types for roster conversion.
//!
//! Only two failure kinds exist: the input file is missing, or something
//! went wrong while reading, decoding, parsing, serializing or writing.
//! Rows with missing required fields are not errors; they are reported as
//! [`SkippedRow`](super::SkippedRow) events.

use std::path::{Path, PathBuf};

use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when converting a roster CSV to JSON.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input CSV does not exist or cannot be opened as a file.
    #[error("CSV file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Any other read, decode, parse, encode or write fault.
    #[error("Error converting CSV to JSON ({stage}): {message}")]
    ConversionFailure {
        /// Step of the conversion that failed
        stage: Stage,
        /// Human readable description, usually including the path involved
        message: String,
        /// Underlying cause, when there is one
        #[source]
        source: Option<BoxedCause>,
    },
}

/// Conversion step a [`ConvertError::ConversionFailure`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Decode,
    Parse,
    Serialize,
    Write,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Decode => "decode",
            Stage::Parse => "parse",
            Stage::Serialize => "serialize",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

impl ConvertError {
    pub fn not_found(path: &Path) -> Self {
        ConvertError::NotFound {
            path: path.to_path_buf(),
        }
    }

    /// Wrap an underlying error as a conversion failure.
    pub fn failure<E>(stage: Stage, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConvertError::ConversionFailure {
            stage,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// A conversion failure with no underlying error value.
    pub fn failure_msg(stage: Stage, message: impl Into<String>) -> Self {
        ConvertError::ConversionFailure {
            stage,
            message: message.into(),
            source: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConvertError::NotFound { .. })
    }

    /// Map an I/O error from reading the input, turning a missing file into `NotFound`.
    pub(crate) fn from_input_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ConvertError::not_found(path),
            _ => ConvertError::failure(
                Stage::Read,
                format!("Failed to read CSV file: {}", path.display()),
                err,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let converted = ConvertError::from_input_io(Path::new("team.csv"), err);
        assert!(converted.is_not_found());
        assert_eq!(converted.to_string(), "CSV file not found: team.csv");
    }

    #[test]
    fn test_permission_error_is_conversion_failure_with_source() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let converted = ConvertError::from_input_io(Path::new("team.csv"), err);
        assert!(!converted.is_not_found());
        assert!(converted.source().is_some());
        assert!(converted.to_string().contains("(read)"));
    }
}
