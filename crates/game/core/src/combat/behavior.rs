//! Opponent spell-choice policy.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::spell::Spell;
use crate::state::Combatant;

/// Picks uniformly among the spells `npc` can currently afford.
///
/// Returns `None` when nothing is affordable; the opponent skips its turn.
/// Stun is deliberately ignored here: a stunned opponent still "chooses",
/// and the resolver rejects the cast.
pub fn choose_spell<'a, R: Rng + ?Sized>(npc: &'a Combatant, rng: &mut R) -> Option<&'a Spell> {
    let castable: Vec<&Spell> = npc.castable_spells().collect();
    castable.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::spell::SpellCatalog;
    use crate::state::StatusEffectKind;

    fn npc_with(names: &[&str], mana: u32) -> Combatant {
        let catalog = SpellCatalog::standard();
        let mut npc = Combatant::new("Student Duelist", 100, 100).with_resources(100, mana);
        for name in names {
            npc.learn_spell(catalog.get(name).unwrap().clone());
        }
        npc
    }

    #[test]
    fn never_picks_unaffordable_spell() {
        let npc = npc_with(&["lumos", "stupefy", "episkey"], 20);
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..200 {
            let spell = choose_spell(&npc, &mut rng).unwrap();
            assert!(spell.mana_cost <= npc.mana());
            assert_eq!(spell.name, "Lumos");
        }
    }

    #[test]
    fn none_when_nothing_is_affordable() {
        let npc = npc_with(&["stupefy", "episkey"], 4);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(choose_spell(&npc, &mut rng).is_none());
    }

    #[test]
    fn none_without_known_spells() {
        let npc = Combatant::new("Training Dummy", 80, 80);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(choose_spell(&npc, &mut rng).is_none());
    }

    #[test]
    fn covers_every_castable_spell() {
        let npc = npc_with(&["lumos", "flipendo", "protego"], 100);
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(choose_spell(&npc, &mut rng).unwrap().name.clone());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn ignores_stun() {
        let mut npc = npc_with(&["lumos"], 100);
        npc.apply_effect(StatusEffectKind::Stunned);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(choose_spell(&npc, &mut rng).is_some());
    }
}
