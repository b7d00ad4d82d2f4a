//! Spell cast resolution.
//!
//! [`cast`] handles the caster side of a spell: stun gating, mana cost and
//! status effect application. It does not touch the target's health. The
//! caller applies the returned damage with [`Combatant::take_damage`], which
//! is where shield mitigation happens.

use crate::spell::{EffectTag, Spell};
use crate::state::{Combatant, StatusEffectKind};

/// Why a cast did not go off.
///
/// These are ordinary turn outcomes, not errors: the duel continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastFailure {
    #[error("Cannot cast while stunned!")]
    Stunned,

    #[error("Not enough mana!")]
    NotEnoughMana,
}

impl CastFailure {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Stunned => "Cannot cast while stunned!",
            Self::NotEnoughMana => "Not enough mana!",
        }
    }
}

/// Result of a single cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastOutcome {
    /// Mana was spent and the effect resolved.
    ///
    /// `damage` is the spell's raw damage, not yet applied to anyone.
    Resolved { damage: u32, effect: EffectTag },

    /// Nothing happened.
    Failed(CastFailure),
}

impl CastOutcome {
    /// Raw damage to apply to the target (0 on failure).
    pub fn damage(&self) -> u32 {
        match self {
            Self::Resolved { damage, .. } => *damage,
            Self::Failed(_) => 0,
        }
    }

    /// Effect name on success, sentinel message on failure, `None` for
    /// spells without an effect.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Resolved { effect, .. } => effect.message(),
            Self::Failed(failure) => Some(failure.message()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Casts `spell` from `caster` at an optional `target`.
///
/// # Rules
///
/// 1. A stunned caster fails; no mana is spent and the stun stays.
/// 2. A caster with less mana than the cost fails; mana is unchanged.
/// 3. Otherwise the cost is deducted and the effect resolves:
///    - `shield` protects the caster, whatever the target
///    - `stun`, `disarm`, `knockback` mark the target (no-op without one)
///    - `heal`, `illumination`, `none` set no status
pub fn cast(spell: &Spell, caster: &mut Combatant, target: Option<&mut Combatant>) -> CastOutcome {
    if caster.has_effect(StatusEffectKind::Stunned) {
        return CastOutcome::Failed(CastFailure::Stunned);
    }

    if !caster.spend_mana(spell.mana_cost) {
        return CastOutcome::Failed(CastFailure::NotEnoughMana);
    }

    match (spell.effect, StatusEffectKind::from_effect(spell.effect)) {
        (EffectTag::Shield, Some(status)) => caster.apply_effect(status),
        (_, Some(status)) => {
            if let Some(target) = target {
                target.apply_effect(status);
            }
        }
        (_, None) => {}
    }

    CastOutcome::Resolved {
        damage: spell.damage,
        effect: spell.effect,
    }
}
