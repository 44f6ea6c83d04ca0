//! Validation of the export envelope into typed [`Message`] records.

use serde_json::Value;
use tracing::debug;

use super::error::FormatError;
use crate::constants::ATTACHMENT_PLACEHOLDER;
use crate::message::{Attachment, Message, Role};

/// Converts a parsed export into normalized messages, in source order.
///
/// Non-object entries are skipped, as are entries with neither text nor an
/// object-shaped attachment. Unknown fields are ignored.
///
/// # Errors
///
/// Returns a [`FormatError`] when the root is not an object, has no
/// `messages` field, or `messages` is not an array.
pub fn normalize(root: &Value) -> Result<Vec<Message>, FormatError> {
    let envelope = root.as_object().ok_or(FormatError::NotAnObject)?;
    let entries = envelope
        .get("messages")
        .ok_or(FormatError::MissingMessages)?
        .as_array()
        .ok_or(FormatError::MessagesNotArray)?;

    let messages: Vec<Message> = entries.iter().filter_map(normalize_entry).collect();
    debug!(
        entries = entries.len(),
        kept = messages.len(),
        skipped = entries.len() - messages.len(),
        "normalized export"
    );
    Ok(messages)
}

fn normalize_entry(entry: &Value) -> Option<Message> {
    let fields = entry.as_object()?;

    let role = Role::from_raw(fields.get("role").and_then(Value::as_str));
    let content = fields
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    let attachments: Vec<Attachment> = fields
        .get("attachments")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_object().cloned().map(Attachment::new))
                .collect()
        })
        .unwrap_or_default();

    if content.is_empty() && attachments.is_empty() {
        return None;
    }

    let content = if content.is_empty() {
        ATTACHMENT_PLACEHOLDER
    } else {
        content
    };

    Some(Message::new(role, content, attachments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_transcript() {
        let messages = normalize(&json!({"messages": [{"role": "user", "content": "hi"}]})).unwrap();
        assert_eq!(messages, vec![Message::user("hi")]);
        assert!(!messages[0].has_attachments());
    }

    #[test]
    fn test_root_not_object() {
        assert_eq!(normalize(&json!([1, 2])), Err(FormatError::NotAnObject));
        assert_eq!(normalize(&json!("text")), Err(FormatError::NotAnObject));
    }

    #[test]
    fn test_missing_messages() {
        assert_eq!(
            normalize(&json!({"conversation": []})),
            Err(FormatError::MissingMessages)
        );
    }

    #[test]
    fn test_messages_not_array() {
        let err = normalize(&json!({"messages": {"role": "user"}})).unwrap_err();
        assert_eq!(err, FormatError::MessagesNotArray);
        assert_eq!(err.to_string(), "'messages' must be an array");
    }

    #[test]
    fn test_unknown_roles_become_user() {
        let messages = normalize(&json!({"messages": [
            {"role": "system", "content": "a"},
            {"role": "", "content": "b"},
            {"role": "Admin", "content": "c"},
            {"role": 7, "content": "d"},
            {"content": "e"},
            {"role": " Assistant ", "content": "f"},
        ]}))
        .unwrap();
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::User, Role::User, Role::User, Role::User, Role::Assistant]
        );
    }

    #[test]
    fn test_skips_non_objects_and_empty_entries() {
        let messages = normalize(&json!({"messages": [
            "loose string",
            42,
            null,
            {"role": "user", "content": "   "},
            {"role": "assistant"},
            {"role": "assistant", "content": 3},
            {"role": "assistant", "content": "  kept  "},
        ]}))
        .unwrap();
        assert_eq!(messages, vec![Message::assistant("kept")]);
    }

    #[test]
    fn test_attachment_only_message_gets_placeholder() {
        let messages = normalize(&json!({"messages": [
            {"role": "user", "content": "", "attachments": [{"name": "photo.png", "type": "image"}]}
        ]}))
        .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "(attachment)");
        assert_eq!(messages[0].attachments.len(), 1);
        assert_eq!(messages[0].attachments[0].label(), Some("photo.png"));
    }

    #[test]
    fn test_attachments_filtered_to_objects() {
        let messages = normalize(&json!({"messages": [
            {"role": "user", "content": "see files", "attachments": ["x", {"url": "u"}, 1]},
            {"role": "user", "content": "", "attachments": ["only", "strings"]},
            {"role": "user", "content": "", "attachments": []},
            {"role": "user", "content": "no list", "attachments": {"url": "u"}},
        ]}))
        .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].attachments.len(), 1);
        assert_eq!(messages[1].content, "no list");
        assert!(!messages[1].has_attachments());
    }

    #[test]
    fn test_preserves_order_and_ignores_unknown_fields() {
        let messages = normalize(&json!({"title": "t", "messages": [
            {"role": "user", "content": "one", "timestamp": 1},
            {"role": "assistant", "content": "two", "model": "x"},
            {"role": "user", "content": "three"},
        ]}))
        .unwrap();
        let texts: Vec<&str> = messages.iter().map(Message::text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
