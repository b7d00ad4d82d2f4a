//! Mutable game entities.
//!
//! - [`Combatant`]: health, mana, known spells, status effects
//! - [`Player`]: combatant plus house, knowledge, house points, inventory
//! - [`Npc`]: combatant plus difficulty, spawned fresh from an [`NpcTemplate`]

pub mod combatant;
pub mod npc;
pub mod player;
pub mod status;

pub use combatant::Combatant;
pub use npc::{Difficulty, Npc, NpcRoster, NpcTemplate};
pub use player::{House, Player, PlayerStats};
pub use status::{StatusEffectKind, StatusEffects};
