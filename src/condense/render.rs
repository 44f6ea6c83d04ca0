//! Assembles the prompt text from a [`Selection`].

use super::select::Selection;
use super::text::{bullet_summary, char_len, take_chars, truncate};
use super::RenderLimits;
use crate::constants::{
    ATTACHMENTS_NOTE, BULLET_PREFIX, CLOSING_BLOCK, FULL_CLOSING, FULL_INTRO, INTRO_LINE,
    LAST_EXCHANGE_HEADER, MIDDLE_HEADER, TOPIC_PREFIX, TRUNCATION_NOTICE,
};
use crate::message::{Attachment, Message};

/// Renders the prompt blocks in order, each separated by a newline.
///
/// The middle block is only emitted when `limits.middle_bullets` is non-zero
/// and at least one middle line qualifies as a bullet.
pub fn render(sel: &Selection<'_>, limits: &RenderLimits) -> String {
    let mut parts: Vec<String> = vec![format!("{}\n", INTRO_LINE)];

    if let Some(topic) = sel.topic {
        parts.push(format!(
            "{}{}\n",
            TOPIC_PREFIX,
            truncate(topic, limits.topic_chars)
        ));
    }

    if sel.has_attachments {
        parts.push(format!("{}\n", ATTACHMENTS_NOTE));
    }

    if limits.middle_bullets > 0 && !sel.middle.is_empty() {
        let bullets = bullet_summary(
            sel.middle.iter().map(Message::text),
            limits.middle_bullets,
            limits.bullet_chars,
        );
        if !bullets.is_empty() {
            parts.push(MIDDLE_HEADER.to_string());
            parts.extend(bullets.iter().map(|b| format!("{}{}", BULLET_PREFIX, b)));
            parts.push(String::new());
        }
    }

    if sel.last_user.is_some() || sel.last_assistant.is_some() {
        parts.push(LAST_EXCHANGE_HEADER.to_string());
        parts.extend(
            sel.last_exchange()
                .map(|msg| exchange_line(msg, limits.exchange_chars)),
        );
        parts.push(String::new());
    }

    parts.push(CLOSING_BLOCK.to_string());
    parts.join("\n").trim().to_string()
}

fn exchange_line(msg: &Message, limit: usize) -> String {
    format!(
        "  {}: {}{}",
        msg.role.label(),
        truncate(msg.text(), limit),
        attachment_suffix(msg)
    )
}

/// Every message verbatim, one `Me:` / `Assistant:` block each.
///
/// Labelled attachments follow their message on their own line.
pub fn full_context(messages: &[Message]) -> String {
    let mut out = String::from(FULL_INTRO);
    for msg in messages {
        out.push_str(&format!("{}: {}", msg.role.label(), msg.text()));
        if let Some(labels) = attachment_labels(msg) {
            out.push_str(&format!("\n[Attachments: {}]", labels));
        }
        out.push_str("\n\n");
    }
    out.push_str(FULL_CLOSING);
    out
}

fn attachment_labels(msg: &Message) -> Option<String> {
    let labels: Vec<&str> = msg.attachments.iter().filter_map(Attachment::label).collect();
    if labels.is_empty() {
        None
    } else {
        Some(labels.join(", "))
    }
}

/// ` [Attachments: a, b]` for the labelled attachments of `msg`, or an empty
/// string when none has a label.
pub fn attachment_suffix(msg: &Message) -> String {
    attachment_labels(msg)
        .map(|labels| format!(" [Attachments: {}]", labels))
        .unwrap_or_default()
}

/// Cuts `text` so that it plus the truncation notice fits in `max_chars`.
///
/// Budgets smaller than the notice itself still get the full notice, so the
/// output is just `"\n\nPlease continue from here."` (starting with the two
/// newlines) whenever `max_chars` is below 28.
pub fn hard_truncate(text: &str, max_chars: usize) -> String {
    let keep = max_chars.saturating_sub(char_len(TRUNCATION_NOTICE));
    format!("{}{}", take_chars(text, keep).trim_end(), TRUNCATION_NOTICE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attachment(value: serde_json::Value) -> Attachment {
        match value {
            serde_json::Value::Object(map) => Attachment::new(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_attachment_suffix() {
        let msg = Message::user("look").with_attachments(vec![
            attachment(json!({"url": "https://x/a.png", "name": "a.png"})),
            attachment(json!({"type": "image"})),
            attachment(json!({"name": "b.txt"})),
        ]);
        assert_eq!(
            attachment_suffix(&msg),
            " [Attachments: https://x/a.png, b.txt]"
        );
    }

    #[test]
    fn test_attachment_suffix_without_labels() {
        let msg = Message::user("look").with_attachments(vec![attachment(json!({"type": "file"}))]);
        assert_eq!(attachment_suffix(&msg), "");
        assert_eq!(attachment_suffix(&Message::user("plain")), "");
    }

    #[test]
    fn test_hard_truncate_fits_budget() {
        let text = "word ".repeat(100);
        let out = hard_truncate(&text, 60);
        assert_eq!(char_len(&out), 60);
        assert!(out.ends_with("\n\nPlease continue from here."));
        assert!(!out.contains(" \n"));
    }

    #[test]
    fn test_hard_truncate_tiny_budget() {
        assert_eq!(hard_truncate("anything", 5), "\n\nPlease continue from here.");
        assert!(hard_truncate("anything", 27).starts_with("\n\n"));
        assert!(hard_truncate("anything", 29).starts_with('a'));
    }

    #[test]
    fn test_render_single_message() {
        let messages = vec![Message::user("hi")];
        let sel = Selection::from_messages(&messages);
        assert_eq!(
            render(&sel, &RenderLimits::RICH),
            "Context from a previous conversation (continue from here):\n\n\
             Topic / goal: hi\n\n\
             Last exchange:\n  Me: hi\n\n\
             ---\nPlease continue from where we left off."
        );
    }

    #[test]
    fn test_compact_omits_middle() {
        let messages: Vec<Message> = (0..8)
            .map(|i| Message::user(format!("message number {i} with enough text")))
            .collect();
        let sel = Selection::from_messages(&messages);
        assert!(render(&sel, &RenderLimits::RICH).contains(MIDDLE_HEADER));
        assert!(!render(&sel, &RenderLimits::COMPACT).contains(MIDDLE_HEADER));
    }
}
