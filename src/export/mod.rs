//! Loading exported chat transcripts.
//!
//! An export is a JSON document `{ "messages": [...] }` read from a file or
//! standard input. [`load`] reads and parses it, then hands the tree to
//! [`normalize`] for validation into typed messages.

mod error;
mod normalize;

pub use error::{ExportError, FormatError};
pub use normalize::normalize;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::message::Message;

/// Where the export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Maps the CLI's positional argument to a source; `-` or absent means stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    fn read_to_string(&self) -> Result<String, ExportError> {
        match self {
            Source::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|error| ExportError::Read {
                        path: PathBuf::from("<stdin>"),
                        error,
                    })?;
                Ok(buf)
            }
            Source::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Path) -> Result<String, ExportError> {
    debug!(path = %path.display(), "reading export");
    std::fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => ExportError::NotFound,
        _ => ExportError::Read {
            path: path.to_path_buf(),
            error,
        },
    })
}

/// Parses export text and normalizes it.
///
/// # Errors
///
/// Returns [`ExportError::Parse`] for invalid JSON, [`ExportError::Format`]
/// for a malformed envelope, and [`ExportError::Empty`] when no message
/// survives normalization.
pub fn parse(text: &str) -> Result<Vec<Message>, ExportError> {
    let root: serde_json::Value = serde_json::from_str(text)?;
    let messages = normalize(&root)?;
    if messages.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(messages)
}

/// Reads the export from `source` and returns its non-empty message list.
pub fn load(source: &Source) -> Result<Vec<Message>, ExportError> {
    let text = source.read_to_string()?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_from_arg() {
        assert_eq!(Source::from_arg(None), Source::Stdin);
        assert_eq!(Source::from_arg(Some("-")), Source::Stdin);
        assert_eq!(
            Source::from_arg(Some("chat.json")),
            Source::File(PathBuf::from("chat.json"))
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, ExportError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_parse_messages_object() {
        let err = parse(r#"{"messages": {}}"#).unwrap_err();
        assert!(matches!(err, ExportError::Format(FormatError::MessagesNotArray)));
        assert!(err.to_string().contains("'messages' must be an array"));
    }

    #[test]
    fn test_parse_empty_result() {
        let err = parse(r#"{"messages": [{"role": "user", "content": ""}, 5]}"#).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert_eq!(err.to_string(), "No messages found in the export.");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("nope.json"));
        let err = load(&source).unwrap_err();
        assert!(matches!(err, ExportError::NotFound));
        assert_eq!(err.to_string(), "File not found.");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"messages": [{{"role": "user", "content": "hello"}}, {{"role": "assistant", "content": "hi there"}}]}}"#
        )
        .unwrap();
        let messages = load(&Source::File(file.path().to_path_buf())).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], Message::assistant("hi there"));
    }
}
