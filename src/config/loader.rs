//! File loading and merging for recap configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::{CompactConfig, Config, RichConfig};

impl Config {
    /// Reads and parses one TOML config file.
    pub(super) fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads the global config from `~/.config/recap/config.toml`.
    ///
    /// A missing file (or no config directory at all) is not an error;
    /// defaults are returned instead.
    pub(super) fn load_global() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("skipping global config: {}", e);
                return Ok(Config::default());
            }
        };
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::from_file(&path)
    }

    /// Look for recap.toml in `start`, then walk up to the git root.
    pub(super) fn load_project(start: &Path) -> Result<Option<Config>> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Self::from_file(&candidate).map(Some);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        Config {
            max_chars: project.max_chars.or(global.max_chars),
            rich: RichConfig {
                topic_chars: project.rich.topic_chars.or(global.rich.topic_chars),
                exchange_chars: project.rich.exchange_chars.or(global.rich.exchange_chars),
                middle_bullets: project.rich.middle_bullets.or(global.rich.middle_bullets),
                bullet_chars: project.rich.bullet_chars.or(global.rich.bullet_chars),
            },
            compact: CompactConfig {
                topic_chars: project.compact.topic_chars.or(global.compact.topic_chars),
                exchange_chars: project
                    .compact
                    .exchange_chars
                    .or(global.compact.exchange_chars),
            },
        }
    }
}
