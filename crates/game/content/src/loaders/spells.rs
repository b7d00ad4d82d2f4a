//! Spell catalog loader.

use std::path::Path;

use game_core::{Spell, SpellCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Spell list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellFile {
    pub spells: Vec<Spell>,
}

/// Loader for the spell catalog from RON files.
pub struct SpellLoader;

impl SpellLoader {
    /// Load the spell catalog from a RON file.
    ///
    /// Registration order follows file order. Duplicate names (compared
    /// case-insensitively) and an empty list are rejected.
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let file: SpellFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        anyhow::ensure!(!file.spells.is_empty(), "Spell catalog is empty");
        let catalog = SpellCatalog::from_spells(file.spells)
            .map_err(|e| anyhow::anyhow!("Invalid spell catalog: {}", e))?;

        Ok(catalog)
    }
}
