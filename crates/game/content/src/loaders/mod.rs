//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into game-core
//! content types. Every loader validates what it reads, so a session never
//! starts with an empty spell catalog or roster.

pub mod config;
pub mod events;
pub mod factory;
pub mod npcs;
pub mod quiz;
pub mod spells;

pub use config::ConfigLoader;
pub use events::EventLoader;
pub use factory::ContentFactory;
pub use npcs::NpcLoader;
pub use quiz::QuizLoader;
pub use spells::SpellLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
