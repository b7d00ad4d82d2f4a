//! Repository contract for saving and loading players.

use game_core::PlayerRecord;

use super::{Result, SaveFile};

/// Repository for player persistence, keyed by save slot name.
pub trait PlayerRepository: Send + Sync {
    /// Save a player record into a slot, replacing what was there.
    fn save(&self, slot: &str, record: &PlayerRecord) -> Result<()>;

    /// Load the save in a slot.
    fn load(&self, slot: &str) -> Result<Option<SaveFile>>;

    /// Check if a slot holds a save.
    fn exists(&self, slot: &str) -> bool;

    /// Delete a save. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all occupied slots, sorted.
    fn list(&self) -> Result<Vec<String>>;
}
