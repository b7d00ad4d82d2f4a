//! Attending class.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ProgressionRules;
use crate::spell::{Spell, SpellCatalog};
use crate::state::Player;

/// Result of attending one class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassOutcome {
    Learned {
        spell: String,
        knowledge: u32,
        house_points: i32,
    },
    /// Nothing left to teach; the player is unchanged.
    AllSpellsKnown,
}

/// Teaches the player a uniformly random catalog spell they do not know yet.
pub fn attend_class<R: Rng + ?Sized>(
    player: &mut Player,
    catalog: &SpellCatalog,
    rules: &ProgressionRules,
    rng: &mut R,
) -> ClassOutcome {
    let unknown: Vec<&Spell> = catalog
        .iter()
        .filter(|spell| !player.combatant().knows(&spell.name))
        .collect();

    let Some(spell) = unknown.choose(rng) else {
        return ClassOutcome::AllSpellsKnown;
    };

    let name = spell.name.clone();
    player.learn_spell((*spell).clone());
    player.gain_knowledge(rules.class_knowledge);
    player.award_house_points(rules.class_house_points);

    ClassOutcome::Learned {
        spell: name,
        knowledge: rules.class_knowledge,
        house_points: rules.class_house_points,
    }
}
