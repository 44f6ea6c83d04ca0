//! Resolution of optional config values into concrete condenser options.

use super::types::{CompactConfig, Config, RichConfig};
use crate::condense::{CondenseOptions, RenderLimits};

impl Config {
    /// Fills unset values from the built-in defaults.
    ///
    /// `max_chars_override` (the `--max-chars` flag) wins over the file.
    pub fn condense_options(&self, max_chars_override: Option<usize>) -> CondenseOptions {
        let defaults = CondenseOptions::default();
        let rich = RenderLimits {
            topic_chars: self.rich.topic_chars.unwrap_or(defaults.rich.topic_chars),
            exchange_chars: self
                .rich
                .exchange_chars
                .unwrap_or(defaults.rich.exchange_chars),
            middle_bullets: self
                .rich
                .middle_bullets
                .unwrap_or(defaults.rich.middle_bullets),
            bullet_chars: self.rich.bullet_chars.unwrap_or(defaults.rich.bullet_chars),
        };
        let compact = RenderLimits {
            topic_chars: self
                .compact
                .topic_chars
                .unwrap_or(defaults.compact.topic_chars),
            exchange_chars: self
                .compact
                .exchange_chars
                .unwrap_or(defaults.compact.exchange_chars),
            ..defaults.compact
        };
        CondenseOptions {
            max_chars: max_chars_override
                .or(self.max_chars)
                .unwrap_or(defaults.max_chars),
            rich,
            compact,
        }
    }
}

impl From<&CondenseOptions> for Config {
    /// A fully populated config describing `options`, for display.
    fn from(options: &CondenseOptions) -> Self {
        Config {
            max_chars: Some(options.max_chars),
            rich: RichConfig {
                topic_chars: Some(options.rich.topic_chars),
                exchange_chars: Some(options.rich.exchange_chars),
                middle_bullets: Some(options.rich.middle_bullets),
                bullet_chars: Some(options.rich.bullet_chars),
            },
            compact: CompactConfig {
                topic_chars: Some(options.compact.topic_chars),
                exchange_chars: Some(options.compact.exchange_chars),
            },
        }
    }
}
