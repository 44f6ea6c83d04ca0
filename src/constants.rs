//! Centralized constants for recap.
//!
//! All magic numbers, fixed prompt strings, and configuration defaults live
//! here so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "recap";

/// Configuration filename inside the global config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "recap.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "RECAP_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// --- Normalization ---

/// Content substituted for messages that only carry attachments.
pub const ATTACHMENT_PLACEHOLDER: &str = "(attachment)";

// --- Budget defaults ---

/// Default maximum length of the condensed prompt, in characters.
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Rich rendering: topic truncation length.
pub const RICH_TOPIC_CHARS: usize = 300;

/// Rich rendering: last user / assistant truncation length.
pub const RICH_EXCHANGE_CHARS: usize = 800;

/// Rich rendering: maximum number of middle bullets.
pub const RICH_MIDDLE_BULLETS: usize = 5;

/// Rich rendering: per-bullet truncation length.
pub const RICH_BULLET_CHARS: usize = 100;

/// Compact rendering: topic truncation length.
pub const COMPACT_TOPIC_CHARS: usize = 250;

/// Compact rendering: last user / assistant truncation length.
pub const COMPACT_EXCHANGE_CHARS: usize = 500;

// --- Selection ---

/// Middle content is only collected when the transcript is longer than this.
pub const MIDDLE_MIN_MESSAGES: usize = 4;

/// Lines shorter than this (after trimming) never become bullets.
pub const MIN_BULLET_SOURCE_CHARS: usize = 10;

// --- Prompt text ---

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Returned when there is nothing to condense.
pub const EMPTY_CONVERSATION: &str = "No conversation to condense.";

pub const INTRO_LINE: &str = "Context from a previous conversation (continue from here):";

pub const TOPIC_PREFIX: &str = "Topic / goal: ";

pub const ATTACHMENTS_NOTE: &str = "(Conversation included images or file attachments.)";

pub const MIDDLE_HEADER: &str = "Key points from the middle of the conversation:";

pub const BULLET_PREFIX: &str = "  • ";

pub const LAST_EXCHANGE_HEADER: &str = "Last exchange:";

pub const CLOSING_BLOCK: &str = "---\nPlease continue from where we left off.";

/// Opens the full-transcript rendering.
pub const FULL_INTRO: &str = "Here's my previous conversation that I want to continue:\n\n---\n\n";

/// Closes the full-transcript rendering.
pub const FULL_CLOSING: &str = "---\n\nPlease continue from where we left off.";

/// Appended after a hard cut of the compact rendering.
pub const TRUNCATION_NOTICE: &str = "\n\nPlease continue from here.";
