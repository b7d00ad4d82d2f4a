//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::PlayerRecord;

use super::{PlayerRepository, RepositoryError, Result, SaveFile, validate_slot};

/// In-memory implementation of PlayerRepository.
pub struct InMemoryPlayerRepo {
    saves: RwLock<BTreeMap<String, SaveFile>>,
}

impl InMemoryPlayerRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            saves: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn save(&self, slot: &str, record: &PlayerRecord) -> Result<()> {
        validate_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(slot.to_string(), SaveFile::new(record.clone()));
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveFile>> {
        validate_slot(slot)?;
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(slot);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.keys().cloned().collect())
    }
}
