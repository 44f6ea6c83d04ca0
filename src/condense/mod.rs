//! Condensation of a normalized transcript into a bounded prompt.
//!
//! The prompt keeps the conversation's topic (first user message), a few
//! bullets from the middle, and the last user/assistant exchange. When that
//! rich rendering exceeds the character budget, a compact rendering without
//! the middle bullets and with tighter truncation is tried; if even that is
//! too long, it is cut hard and a short notice appended.
//!
//! [`full_context`] is the unabridged alternative: every message in order,
//! with no budget applied.

mod render;
mod select;
mod text;


pub use text::char_len;

use tracing::debug;

use crate::constants::{
    COMPACT_EXCHANGE_CHARS, COMPACT_TOPIC_CHARS, DEFAULT_MAX_CHARS, EMPTY_CONVERSATION,
    RICH_BULLET_CHARS, RICH_EXCHANGE_CHARS, RICH_MIDDLE_BULLETS, RICH_TOPIC_CHARS,
};
use crate::message::Message;
use select::Selection;

/// Truncation limits for one rendering tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    /// Maximum characters of the topic line's text.
    pub topic_chars: usize,
    /// Maximum characters of each last-exchange message.
    pub exchange_chars: usize,
    /// Maximum number of middle bullets; zero omits the block.
    pub middle_bullets: usize,
    /// Maximum characters per middle bullet.
    pub bullet_chars: usize,
}

impl RenderLimits {
    pub const RICH: Self = Self {
        topic_chars: RICH_TOPIC_CHARS,
        exchange_chars: RICH_EXCHANGE_CHARS,
        middle_bullets: RICH_MIDDLE_BULLETS,
        bullet_chars: RICH_BULLET_CHARS,
    };

    pub const COMPACT: Self = Self {
        topic_chars: COMPACT_TOPIC_CHARS,
        exchange_chars: COMPACT_EXCHANGE_CHARS,
        middle_bullets: 0,
        bullet_chars: RICH_BULLET_CHARS,
    };
}

/// Everything [`condense`] needs besides the messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CondenseOptions {
    /// Character budget for the final prompt.
    pub max_chars: usize,
    pub rich: RenderLimits,
    pub compact: RenderLimits,
}

impl Default for CondenseOptions {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            rich: RenderLimits::RICH,
            compact: RenderLimits::COMPACT,
        }
    }
}

#[cfg(test)]
impl CondenseOptions {
    /// Default limits with a custom budget.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars,
            ..Self::default()
        }
    }
}

/// Which rendering produced the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// No messages; the prompt is a fixed sentence.
    Empty,
    Rich,
    Compact,
    /// Compact rendering cut to the budget.
    Truncated,
    /// Every message verbatim.
    Full,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Empty => write!(f, "empty"),
            Tier::Rich => write!(f, "rich"),
            Tier::Compact => write!(f, "compact"),
            Tier::Truncated => write!(f, "truncated"),
            Tier::Full => write!(f, "full"),
        }
    }
}

/// A finished prompt and the tier it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensed {
    pub text: String,
    pub tier: Tier,
}

/// Builds the condensed prompt for `messages`.
///
/// Never fails: an empty transcript yields a fixed sentence, and an
/// oversized one degrades from rich to compact to a hard cut. The result
/// fits `options.max_chars` whenever the budget can hold the truncation
/// notice.
pub fn condense(messages: &[Message], options: &CondenseOptions) -> Condensed {
    if messages.is_empty() {
        return Condensed {
            text: EMPTY_CONVERSATION.to_string(),
            tier: Tier::Empty,
        };
    }

    let sel = Selection::from_messages(messages);

    let rich = render::render(&sel, &options.rich);
    let rich_len = char_len(&rich);
    if rich_len <= options.max_chars {
        debug!(chars = rich_len, budget = options.max_chars, "rich rendering fits");
        return Condensed {
            text: rich,
            tier: Tier::Rich,
        };
    }

    let compact = render::render(&sel, &options.compact);
    let compact_len = char_len(&compact);
    if compact_len <= options.max_chars {
        debug!(
            rich_chars = rich_len,
            chars = compact_len,
            budget = options.max_chars,
            "falling back to compact rendering"
        );
        return Condensed {
            text: compact,
            tier: Tier::Compact,
        };
    }

    debug!(
        compact_chars = compact_len,
        budget = options.max_chars,
        "hard-truncating compact rendering"
    );
    Condensed {
        text: render::hard_truncate(&compact, options.max_chars),
        tier: Tier::Truncated,
    }
}

/// Renders the whole transcript without condensing or truncating it.
pub fn full_context(messages: &[Message]) -> Condensed {
    let text = render::full_context(messages);
    debug!(messages = messages.len(), chars = char_len(&text), "rendered full transcript");
    Condensed {
        text,
        tier: Tier::Full,
    }
}
