//! NPC roster loader.

use std::path::Path;

use game_core::{NpcRoster, NpcTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcFile {
    pub npcs: Vec<NpcTemplate>,
}

/// Loader for the NPC roster from RON files.
pub struct NpcLoader;

impl NpcLoader {
    pub fn load(path: &Path) -> LoadResult<NpcRoster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NpcRoster> {
        let file: NpcFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC roster RON: {}", e))?;

        anyhow::ensure!(!file.npcs.is_empty(), "NPC roster is empty");
        Ok(NpcRoster::new(file.npcs))
    }
}
