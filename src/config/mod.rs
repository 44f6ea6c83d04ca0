//! Configuration types and loading for recap.
//!
//! Settings are optional TOML: a global file at the platform's XDG config
//! path (e.g. `~/.config/recap/config.toml` on Linux) and a per-project
//! `recap.toml` found by walking up from the working directory.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tracing::debug;

impl Config {
    /// Load config with precedence: project > global > defaults.
    /// Missing files are skipped; nothing is written.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::project_for(std::env::current_dir())?;

        let mut config = global;
        if let Some(proj) = project {
            config = Self::merge(config, proj);
        }
        Ok(config)
    }

    /// Project config for the working directory, if it can be determined.
    fn project_for(cwd: io::Result<PathBuf>) -> Result<Option<Self>> {
        match cwd {
            Ok(dir) => Self::load_project(&dir),
            Err(e) => {
                debug!("skipping project config: {}", e);
                Ok(None)
            }
        }
    }
}
