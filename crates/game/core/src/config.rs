//! Game configuration constants and tunable parameters.

/// Tunable game parameters.
///
/// Every field has a default, so configuration files only need to list the
/// values they override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Rewards, penalties and recovery applied by the duel orchestrator.
    pub duel: DuelRules,

    /// Growth from classes and exploration.
    pub progression: ProgressionRules,

    /// Items a new player starts with.
    pub starting_inventory: Vec<String>,

    /// Catalog key of the spell every new player knows.
    pub starting_spell: String,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Shield, Stunned, Disarmed, Knocked Back.
    pub const MAX_STATUS_EFFECTS: usize = 4;

    pub const DEFAULT_STARTING_SPELL: &'static str = "lumos";

    pub fn new() -> Self {
        Self {
            duel: DuelRules::default(),
            progression: ProgressionRules::default(),
            starting_inventory: vec!["Wand".to_string(), "Textbooks".to_string()],
            starting_spell: Self::DEFAULT_STARTING_SPELL.to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Duel scoring and post-duel recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelRules {
    /// House points awarded when the opponent is defeated.
    pub victory_points: i32,
    /// House points applied when the player is defeated (negative).
    pub defeat_points: i32,
    /// Health restored to the player once the duel ends, win or lose.
    pub recovery_health: u32,
    /// Mana restored to the player once the duel ends, win or lose.
    pub recovery_mana: u32,
    /// Health restored to the caster of a successful `heal` spell.
    pub heal_spell_amount: u32,
}

impl DuelRules {
    pub const DEFAULT_VICTORY_POINTS: i32 = 20;
    pub const DEFAULT_DEFEAT_POINTS: i32 = -10;
    pub const DEFAULT_RECOVERY: u32 = 30;
    pub const DEFAULT_HEAL_SPELL_AMOUNT: u32 = 25;
}

impl Default for DuelRules {
    fn default() -> Self {
        Self {
            victory_points: Self::DEFAULT_VICTORY_POINTS,
            defeat_points: Self::DEFAULT_DEFEAT_POINTS,
            recovery_health: Self::DEFAULT_RECOVERY,
            recovery_mana: Self::DEFAULT_RECOVERY,
            heal_spell_amount: Self::DEFAULT_HEAL_SPELL_AMOUNT,
        }
    }
}

/// Knowledge and house point growth outside of duels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionRules {
    /// Knowledge gained when a class teaches a new spell.
    pub class_knowledge: u32,
    /// House points awarded when a class teaches a new spell.
    pub class_house_points: i32,
    /// Lower bound (inclusive) of mana restored while exploring.
    pub explore_mana_min: u32,
    /// Upper bound (inclusive) of mana restored while exploring.
    pub explore_mana_max: u32,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            class_knowledge: 10,
            class_house_points: 5,
            explore_mana_min: 5,
            explore_mana_max: 15,
        }
    }
}
