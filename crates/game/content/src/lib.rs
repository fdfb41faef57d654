//! Data-driven world content and loaders.
//!
//! This crate turns data files into validated game-core values:
//! - World definition (locations and item catalog, JSON)
//! - Game configuration (moves budget, gates, arena tuning, TOML)
//!
//! Content is read once at startup and never appears in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, WorldFile, WorldLoader};
