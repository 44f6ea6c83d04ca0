//! Struct definitions for recap configuration.

use serde::{Deserialize, Serialize};

/// Root configuration, deserialized from `config.toml` or `recap.toml`.
///
/// Every field is optional; unset values fall back to the built-in defaults
/// in [`crate::constants`].
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Character budget for the condensed prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
    /// Limits for the rich rendering.
    pub rich: RichConfig,
    /// Limits for the compact fallback rendering.
    pub compact: CompactConfig,
}

/// Truncation limits for the rich rendering.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RichConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_bullets: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_chars: Option<usize>,
}

/// Truncation limits for the compact rendering. It never has middle bullets.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CompactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_chars: Option<usize>,
}
