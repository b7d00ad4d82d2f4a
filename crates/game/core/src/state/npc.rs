//! NPC templates and the opponents spawned from them.
//!
//! Opponents are never shared between duels. A [`NpcTemplate`] describes who
//! the opponent is, and [`NpcTemplate::spawn`] produces a fresh [`Npc`] with
//! full resources, no status effects, and a newly drawn spell sample.

use rand::Rng;
use rand::seq::SliceRandom;

use super::combatant::Combatant;
use crate::spell::{Spell, SpellCatalog};

/// Opponent difficulty.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const fn max_health(self) -> u32 {
        match self {
            Self::Easy => 80,
            Self::Normal => 100,
            Self::Hard => 120,
        }
    }

    pub const fn max_mana(self) -> u32 {
        match self {
            Self::Easy => 80,
            Self::Normal => 100,
            Self::Hard => 120,
        }
    }

    /// Number of distinct catalog spells an opponent of this difficulty knows.
    pub const fn spell_count(self) -> usize {
        match self {
            Self::Easy => 2,
            Self::Normal => 3,
            Self::Hard => 4,
        }
    }
}

/// Data-driven description of an opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcTemplate {
    pub name: String,
    pub difficulty: Difficulty,
}

impl NpcTemplate {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }

    /// Spawns a fresh opponent.
    ///
    /// The opponent knows a uniform random sample of distinct catalog spells;
    /// a catalog smaller than the sample size is taught in full.
    pub fn spawn<R: Rng + ?Sized>(&self, catalog: &SpellCatalog, rng: &mut R) -> Npc {
        let mut combatant = Combatant::new(
            self.name.clone(),
            self.difficulty.max_health(),
            self.difficulty.max_mana(),
        );

        let pool: Vec<&Spell> = catalog.iter().collect();
        for spell in pool.choose_multiple(rng, self.difficulty.spell_count()) {
            combatant.learn_spell((*spell).clone());
        }

        Npc {
            combatant,
            difficulty: self.difficulty,
        }
    }
}

/// A spawned opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    combatant: Combatant,
    difficulty: Difficulty,
}

impl Npc {
    /// Wraps an explicitly built combatant (scripted opponents, tests).
    pub fn from_combatant(combatant: Combatant, difficulty: Difficulty) -> Self {
        Self {
            combatant,
            difficulty,
        }
    }

    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }
}

/// Ordered list of opponents offered for duels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NpcRoster {
    templates: Vec<NpcTemplate>,
}

impl NpcRoster {
    pub fn new(templates: Vec<NpcTemplate>) -> Self {
        Self { templates }
    }

    /// Training Dummy (easy), Student Duelist (normal), Dark Wizard (hard).
    pub fn standard() -> Self {
        Self::new(vec![
            NpcTemplate::new("Training Dummy", Difficulty::Easy),
            NpcTemplate::new("Student Duelist", Difficulty::Normal),
            NpcTemplate::new("Dark Wizard", Difficulty::Hard),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&NpcTemplate> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NpcTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for NpcRoster {
    fn default() -> Self {
        Self::standard()
    }
}
