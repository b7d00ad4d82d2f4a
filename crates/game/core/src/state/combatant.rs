//! Shared entity model for anything that casts or receives spells.

use super::status::{StatusEffectKind, StatusEffects};
use crate::spell::Spell;

/// Health, mana, known spells and active status effects.
///
/// Both the player and NPCs wrap a `Combatant`; the differences between
/// them are construction-time only.
///
/// # Invariants
///
/// - `0 <= health <= max_health` and `0 <= mana <= max_mana`, clamped on every mutation
/// - `max_health` and `max_mana` are at least 1
/// - `known_spells` never holds two spells with the same (case-insensitive) name
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    max_health: u32,
    max_mana: u32,
    health: u32,
    mana: u32,
    known_spells: Vec<Spell>,
    status_effects: StatusEffects,
}

impl Combatant {
    /// Creates a combatant at full health and mana.
    pub fn new(name: impl Into<String>, max_health: u32, max_mana: u32) -> Self {
        let max_health = max_health.max(1);
        let max_mana = max_mana.max(1);
        Self {
            name: name.into(),
            max_health,
            max_mana,
            health: max_health,
            mana: max_mana,
            known_spells: Vec::new(),
            status_effects: StatusEffects::empty(),
        }
    }

    /// Overrides current health and mana, clamped to the maximums (builder pattern).
    #[must_use]
    pub fn with_resources(mut self, health: u32, mana: u32) -> Self {
        self.health = health.min(self.max_health);
        self.mana = mana.min(self.max_mana);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    /// Quick check if the combatant is still standing.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    // ========================================================================
    // Resources
    // ========================================================================

    /// Applies incoming damage and returns the mitigated amount.
    ///
    /// An active shield halves the damage (rounding down) and is consumed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let mitigated = if self.status_effects.remove(StatusEffectKind::Shield) {
            amount / 2
        } else {
            amount
        };
        self.health = self.health.saturating_sub(mitigated);
        mitigated
    }

    /// Restores health, capped at `max_health`.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Restores mana, capped at `max_mana`.
    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    /// Deducts `cost` if affordable.
    ///
    /// Returns false (and leaves mana untouched) if the combatant cannot pay.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        match self.mana.checked_sub(cost) {
            Some(remaining) => {
                self.mana = remaining;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Spells
    // ========================================================================

    pub fn known_spells(&self) -> &[Spell] {
        &self.known_spells
    }

    /// Case-insensitive check against known spell names.
    ///
    /// Folds case the same way as the spell catalog.
    pub fn knows(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.known_spells.iter().any(|spell| spell.key() == key)
    }

    /// Adds a spell to the known list.
    ///
    /// Returns false if a spell with the same name is already known.
    pub fn learn_spell(&mut self, spell: Spell) -> bool {
        if self.knows(&spell.name) {
            return false;
        }
        self.known_spells.push(spell);
        true
    }

    /// Known spells whose cost does not exceed current mana.
    pub fn castable_spells(&self) -> impl Iterator<Item = &Spell> + '_ {
        self.known_spells
            .iter()
            .filter(move |spell| spell.is_castable_with(self.mana))
    }

    /// Returns true if some known, affordable spell deals direct damage.
    pub fn can_deal_damage(&self) -> bool {
        self.castable_spells().any(Spell::is_damaging)
    }

    // ========================================================================
    // Status effects
    // ========================================================================

    pub fn status_effects(&self) -> &StatusEffects {
        &self.status_effects
    }

    pub fn has_effect(&self, kind: StatusEffectKind) -> bool {
        self.status_effects.has(kind)
    }

    /// Activates a status effect; re-applying an active effect is a no-op.
    pub fn apply_effect(&mut self, kind: StatusEffectKind) {
        self.status_effects.add(kind);
    }

    pub fn clear_effects(&mut self) {
        self.status_effects.clear();
    }
}
