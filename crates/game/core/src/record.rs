//! Flat persisted form of a [`Player`].
//!
//! Status effects are duel-scoped and never stored. Known spells are stored
//! by name and re-resolved against a catalog on restore.

use std::str::FromStr;

use crate::error::{ErrorSeverity, GameError};
use crate::spell::SpellCatalog;
use crate::state::{Combatant, House, Player};

/// Errors that make a record impossible to restore.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("unknown house '{house}'")]
    UnknownHouse { house: String },

    #[error("player name is empty")]
    EmptyName,

    #[error("{field} must be positive")]
    NonPositiveMaximum { field: &'static str },
}

impl GameError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHouse { .. } => "RECORD_UNKNOWN_HOUSE",
            Self::EmptyName => "RECORD_EMPTY_NAME",
            Self::NonPositiveMaximum { .. } => "RECORD_NON_POSITIVE_MAXIMUM",
        }
    }
}

/// Player snapshot as stored in save files.
///
/// `health` and `mana` are signed so that out-of-range values written by
/// hand are clamped on restore instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub name: String,
    pub house: String,
    pub health: i64,
    pub max_health: u32,
    pub mana: i64,
    pub max_mana: u32,
    pub knowledge: u32,
    pub house_points: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_spells: Vec<String>,
}

/// A player rebuilt from a record, plus the spell names that were dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestoredPlayer {
    pub player: Player,
    pub skipped_spells: Vec<String>,
}

impl PlayerRecord {
    pub fn from_player(player: &Player) -> Self {
        let c = player.combatant();
        Self {
            name: c.name().to_string(),
            house: player.house().to_string(),
            health: i64::from(c.health()),
            max_health: c.max_health(),
            mana: i64::from(c.mana()),
            max_mana: c.max_mana(),
            knowledge: player.knowledge(),
            house_points: player.house_points(),
            inventory: player.inventory().to_vec(),
            known_spells: c.known_spells().iter().map(|s| s.name.clone()).collect(),
        }
    }

    /// Rebuilds the player.
    ///
    /// Spell names are looked up case-insensitively; unknown names are
    /// skipped and returned in [`RestoredPlayer::skipped_spells`]. Health is
    /// clamped into `[1, max]` so a restored player can always duel again;
    /// mana is clamped into `[0, max]`.
    pub fn into_player(self, catalog: &SpellCatalog) -> Result<RestoredPlayer, RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        let house = House::from_str(self.house.trim()).map_err(|_| RecordError::UnknownHouse {
            house: self.house.clone(),
        })?;
        if self.max_health == 0 {
            return Err(RecordError::NonPositiveMaximum {
                field: "max_health",
            });
        }
        if self.max_mana == 0 {
            return Err(RecordError::NonPositiveMaximum { field: "max_mana" });
        }

        let mut combatant = Combatant::new(self.name, self.max_health, self.max_mana)
            .with_resources(clamp(self.health).max(1), clamp(self.mana));

        let mut skipped_spells = Vec::new();
        for name in self.known_spells {
            match catalog.get(&name) {
                Some(spell) => {
                    combatant.learn_spell(spell.clone());
                }
                None => skipped_spells.push(name),
            }
        }

        let player = Player::from_parts(
            combatant,
            house,
            self.knowledge,
            self.house_points,
            self.inventory,
        );

        Ok(RestoredPlayer {
            player,
            skipped_spells,
        })
    }
}

fn clamp(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
