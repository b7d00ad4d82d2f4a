//! Casting a known spell outside of combat.

use super::ProgressionError;
use crate::combat::{CastOutcome, cast};
use crate::config::DuelRules;
use crate::spell::EffectTag;
use crate::state::Player;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PracticeReport {
    pub spell: String,
    pub outcome: CastOutcome,
    /// Health restored by a successful heal spell.
    pub healed: u32,
}

/// Casts the player's `index`-th known spell with no target.
///
/// Mana is spent and a shield still lands on the caster. Damage has nowhere
/// to go and is discarded.
pub fn practice_cast(
    player: &mut Player,
    index: usize,
    rules: &DuelRules,
) -> Result<PracticeReport, ProgressionError> {
    let known = player.combatant().known_spells();
    let spell = known
        .get(index)
        .cloned()
        .ok_or(ProgressionError::SpellIndexOutOfRange {
            index,
            known: known.len(),
        })?;

    let caster = player.combatant_mut();
    let outcome = cast(&spell, caster, None);

    let mut healed = 0;
    if let CastOutcome::Resolved {
        effect: EffectTag::Heal,
        ..
    } = outcome
    {
        let before = caster.health();
        caster.heal(rules.heal_spell_amount);
        healed = caster.health() - before;
    }

    Ok(PracticeReport {
        spell: spell.name,
        outcome,
        healed,
    })
}
