//! Everything a session needs besides the player.

use game_core::{EventTable, GameConfig, NpcRoster, SortingQuiz, SpellCatalog};

/// Loaded game content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub catalog: SpellCatalog,
    pub roster: NpcRoster,
    pub events: EventTable,
    pub quiz: SortingQuiz,
}

impl ContentBundle {
    /// Built-in content, identical to the shipped `data/` directory.
    pub fn standard() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: SpellCatalog::standard(),
            roster: NpcRoster::standard(),
            events: EventTable::standard(),
            quiz: SortingQuiz::standard(),
        }
    }
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self::standard()
    }
}
