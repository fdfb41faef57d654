//! Content factory for building game inputs from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, WorldRegistry};

use crate::loaders::{ConfigLoader, LoadResult, WorldLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── world.json
/// └── config.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const WORLD_FILE: &'static str = "world.json";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load and validate the world from `world.json`.
    pub fn load_world(&self) -> LoadResult<WorldRegistry> {
        WorldLoader::load(&self.data_dir.join(Self::WORLD_FILE))
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields [`GameConfig::default`]; a present but invalid
    /// file is an error.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
