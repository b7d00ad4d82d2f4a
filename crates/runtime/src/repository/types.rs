//! Save file envelope.

use chrono::{DateTime, Utc};
use game_core::PlayerRecord;
use serde::{Deserialize, Serialize};

/// What a save slot holds: the player record plus metadata.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "saved_at": "2026-01-01T12:00:00Z",
///   "player": { "name": "...", "house": "Gryffindor", ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Format version, bumped on incompatible changes
    pub version: u32,

    /// When the save was written
    pub saved_at: DateTime<Utc>,

    pub player: PlayerRecord,
}

impl SaveFile {
    pub const CURRENT_VERSION: u32 = 1;

    /// Wraps a record stamped with the current time.
    pub fn new(player: PlayerRecord) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            saved_at: Utc::now(),
            player,
        }
    }
}
