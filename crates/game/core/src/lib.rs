//! Deterministic duel rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules (spell catalog, combatants, cast
//! resolution, duels, progression) and exposes pure APIs that take their
//! randomness as an explicit [`rand::Rng`]. It performs no I/O and never
//! prints; supporting crates render the structured results re-exported here.
pub mod combat;
pub mod config;
pub mod error;
pub mod progression;
pub mod record;
pub mod spell;
pub mod state;

pub use combat::{
    CastFailure, CastOutcome, Duel, DuelError, DuelEvent, DuelInput, DuelOutcome, DuelStatus,
    Side, TurnChoice, TurnReport, cast, choose_spell, run_duel,
};
pub use config::{DuelRules, GameConfig, ProgressionRules};
pub use error::{ErrorSeverity, GameError};
pub use progression::{
    ClassOutcome, EventTable, ExploreOutcome, PracticeReport, ProgressionError, RandomEvent,
    SortingHat, SortingOption, SortingQuestion, SortingQuiz, attend_class, explore, practice_cast,
};
pub use record::{PlayerRecord, RecordError, RestoredPlayer};
pub use spell::{CatalogError, EffectTag, Spell, SpellCatalog};
pub use state::{
    Combatant, Difficulty, House, Npc, NpcRoster, NpcTemplate, Player, PlayerStats,
    StatusEffectKind, StatusEffects,
};
