//! Exploration event loader.

use std::path::Path;

use game_core::{EventTable, RandomEvent};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Event list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFile {
    pub events: Vec<RandomEvent>,
}

/// Loader for exploration events from RON files.
pub struct EventLoader;

impl EventLoader {
    pub fn load(path: &Path) -> LoadResult<EventTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EventTable> {
        let file: EventFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse event table RON: {}", e))?;

        anyhow::ensure!(!file.events.is_empty(), "Event table is empty");
        Ok(EventTable::new(file.events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_points() {
        let table = EventLoader::parse(
            r#"(events: [(description: "Caught out after curfew!", points: -10)])"#,
        )
        .unwrap();
        assert_eq!(table.iter().next().unwrap().points, -10);
    }
}
