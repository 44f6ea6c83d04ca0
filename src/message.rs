//! Message types for an exported conversation.
//!
//! A [`Message`] is what the normalizer produces from one entry of the
//! export's `messages` array. Records are immutable once built; the
//! condenser only reads them.

use serde_json::{Map, Value};

/// The role of a message sender in the conversation.
///
/// Exports may carry other roles (`system`, `tool`, ...); those collapse to
/// [`Role::User`] during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Parses a raw role value. Anything other than `user` or `assistant`
    /// (case-insensitive, surrounding whitespace ignored) is a user.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_lowercase()).as_deref() {
            Some("assistant") => Role::Assistant,
            _ => Role::User,
        }
    }

    /// Speaker label used for this role in rendered prompts.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "Me",
            Role::Assistant => "Assistant",
        }
    }
}

/// A file or image reference attached to a message.
///
/// Exports use a loose `{ "name", "url", "type" }` shape, so the fields are
/// kept as an opaque JSON object and only inspected for a display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    fields: Map<String, Value>,
}

impl Attachment {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the attachment's `url`, falling back to its `name`.
    /// Empty or non-string values are skipped.
    pub fn label(&self) -> Option<&str> {
        ["url", "name"]
            .iter()
            .filter_map(|key| self.fields.get(*key).and_then(Value::as_str))
            .find(|s| !s.is_empty())
    }
}

/// A single normalized message in a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            role,
            content: content.into(),
            attachments,
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

#[cfg(test)]
impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Adds attachments to a message, builder style.
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attachment(value: Value) -> Attachment {
        match value {
            Value::Object(map) => Attachment::new(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_role_from_raw() {
        assert_eq!(Role::from_raw(Some("assistant")), Role::Assistant);
        assert_eq!(Role::from_raw(Some("  ASSISTANT ")), Role::Assistant);
        assert_eq!(Role::from_raw(Some("user")), Role::User);
        assert_eq!(Role::from_raw(Some("system")), Role::User);
        assert_eq!(Role::from_raw(Some("Admin")), Role::User);
        assert_eq!(Role::from_raw(Some("")), Role::User);
        assert_eq!(Role::from_raw(None), Role::User);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "Me");
        assert_eq!(Role::Assistant.label(), "Assistant");
    }

    #[test]
    fn test_attachment_label_prefers_url() {
        let a = attachment(json!({"name": "cat.png", "url": "https://x/cat.png"}));
        assert_eq!(a.label(), Some("https://x/cat.png"));
    }

    #[test]
    fn test_attachment_label_falls_back_to_name() {
        let a = attachment(json!({"name": "notes.txt", "url": ""}));
        assert_eq!(a.label(), Some("notes.txt"));
        let b = attachment(json!({"name": "report.pdf", "url": 42}));
        assert_eq!(b.label(), Some("report.pdf"));
    }

    #[test]
    fn test_attachment_label_missing() {
        let a = attachment(json!({"type": "image"}));
        assert_eq!(a.label(), None);
    }
}
