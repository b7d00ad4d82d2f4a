//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::bundle::ContentBundle;
use crate::loaders::{
    ConfigLoader, EventLoader, LoadResult, NpcLoader, QuizLoader, SpellLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// ├── npcs.ron
/// ├── events.ron
/// └── quiz.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<game_core::GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the spell catalog from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<game_core::SpellCatalog> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load the opponent roster from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<game_core::NpcRoster> {
        NpcLoader::load(&self.data_dir.join("npcs.ron"))
    }

    /// Load exploration events from `events.ron`.
    pub fn load_events(&self) -> LoadResult<game_core::EventTable> {
        EventLoader::load(&self.data_dir.join("events.ron"))
    }

    /// Load the sorting hat quiz from `quiz.ron`.
    pub fn load_quiz(&self) -> LoadResult<game_core::SortingQuiz> {
        QuizLoader::load(&self.data_dir.join("quiz.ron"))
    }

    /// Load every content file.
    ///
    /// The configured starting spell must exist in the loaded catalog.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let config = self.load_config().context("loading config.toml")?;
        let catalog = self.load_spells().context("loading spells.ron")?;
        catalog
            .require(&config.starting_spell)
            .context("checking the starting spell")?;

        Ok(ContentBundle {
            config,
            catalog,
            roster: self.load_npcs().context("loading npcs.ron")?,
            events: self.load_events().context("loading events.ron")?,
            quiz: self.load_quiz().context("loading quiz.ron")?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
