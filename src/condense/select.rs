//! Picks the parts of a transcript worth carrying into the prompt.

use crate::constants::MIDDLE_MIN_MESSAGES;
use crate::message::{Message, Role};

/// The pieces of a transcript the renderer draws from.
#[derive(Debug)]
pub struct Selection<'a> {
    /// Content of the first user message.
    pub topic: Option<&'a str>,
    /// Most recent user message.
    pub last_user: Option<&'a Message>,
    /// Most recent assistant message, found independently of `last_user`.
    pub last_assistant: Option<&'a Message>,
    /// Everything between the first message and the last two.
    pub middle: &'a [Message],
    pub has_attachments: bool,
}

impl<'a> Selection<'a> {
    pub fn from_messages(messages: &'a [Message]) -> Self {
        let mut last_user = None;
        let mut last_assistant = None;
        for msg in messages.iter().rev() {
            match msg.role {
                Role::User if last_user.is_none() => last_user = Some(msg),
                Role::Assistant if last_assistant.is_none() => last_assistant = Some(msg),
                _ => {}
            }
            if last_user.is_some() && last_assistant.is_some() {
                break;
            }
        }

        let topic = messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(Message::text);

        let n = messages.len();
        let middle: &[Message] = if n > MIDDLE_MIN_MESSAGES {
            &messages[1..n - 2]
        } else {
            &[]
        };

        Self {
            topic,
            last_user,
            last_assistant,
            middle,
            has_attachments: messages.iter().any(Message::has_attachments),
        }
    }

    /// The last-exchange messages in display order: user first.
    pub fn last_exchange(&self) -> impl Iterator<Item = &'a Message> {
        [self.last_user, self.last_assistant].into_iter().flatten()
    }
}
