//! Error types for loading an exported transcript.
//!
//! Variants carry their cause inside the message rather than as an error
//! source, so each prints as one complete diagnostic line.

use std::path::PathBuf;
use thiserror::Error;

/// Ways the export envelope can be malformed after JSON parsing succeeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected JSON object with 'messages' array")]
    NotAnObject,
    #[error("missing 'messages' field")]
    MissingMessages,
    #[error("'messages' must be an array")]
    MessagesNotArray,
}

/// Failure to turn an input source into a non-empty message list.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File not found.")]
    NotFound,
    #[error("Could not read {}: {error}", path.display())]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("Invalid JSON - {0}")]
    Parse(serde_json::Error),
    #[error("Invalid export: {0}")]
    Format(FormatError),
    #[error("No messages found in the export.")]
    Empty,
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Parse(err)
    }
}

impl From<FormatError> for ExportError {
    fn from(err: FormatError) -> Self {
        ExportError::Format(err)
    }
}
