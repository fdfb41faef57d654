//! Runtime configuration and environment overrides.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Settings that decide where content comes from and how it is tuned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `world.json` and an optional `config.toml`.
    pub data_dir: PathBuf,
    /// Overrides `arena.seed` from the config file.
    pub seed: Option<u64>,
    /// Overrides `max_moves` from the config file.
    pub max_moves: Option<u32>,
    /// Default tracing directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl RuntimeConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            seed: None,
            max_moves: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_DATA_DIR` - Content directory (default: `data`)
    /// - `GAME_SEED` - Arena random seed (default: from config file)
    /// - `GAME_MAX_MOVES` - Moves budget (default: from config file)
    /// - `GAME_LOG` - Tracing directive used when `RUST_LOG` is unset (default: `info`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("GAME_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("GAME_SEED");
        config.max_moves = read_env::<u32>("GAME_MAX_MOVES").map(|moves| moves.max(1));
        if let Ok(filter) = env::var("GAME_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Applies the overrides on top of a loaded game configuration.
    pub fn apply(&self, mut game: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            game.arena.seed = seed;
        }
        if let Some(max_moves) = self.max_moves {
            game.max_moves = max_moves;
        }
        game
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DATA_DIR)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_what_is_set() {
        let game = GameConfig::default().with_max_moves(10);

        let untouched = RuntimeConfig::default().apply(game.clone());
        assert_eq!(untouched, game);

        let tuned = RuntimeConfig::default()
            .with_seed(42)
            .with_max_moves(5)
            .apply(game);
        assert_eq!(tuned.max_moves, 5);
        assert_eq!(tuned.arena.seed, 42);
    }
}
