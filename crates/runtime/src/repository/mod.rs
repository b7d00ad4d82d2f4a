//! Repository layer for player saves.
//!
//! Repositories handle data that CHANGES during play: the player record.
//! Static game content (spells, NPCs, events) is loaded by `game-content`,
//! not stored here.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;
pub use traits::PlayerRepository;
pub use types::SaveFile;

/// Slot names become file names, so they are restricted to `[A-Za-z0-9_-]`.
pub(crate) fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_string()))
    }
}
