//! Status effect system for combatants.
//!
//! Status effects are duel-scoped conditions. They carry no duration: an
//! effect stays active until it is consumed (shield) or cleared at the end
//! of a duel.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::spell::EffectTag;

/// Types of status effects.
///
/// `Display` yields the label shown in status lists (`"Knocked Back"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatusEffectKind {
    /// Halves the next incoming damage, then breaks.
    Shield,

    /// Cannot cast spells.
    Stunned,

    /// Wand knocked away.
    Disarmed,

    /// Pushed back by a blast.
    #[strum(serialize = "Knocked Back")]
    KnockedBack,
}

impl StatusEffectKind {
    /// Status applied by a spell effect, if any.
    pub const fn from_effect(effect: EffectTag) -> Option<Self> {
        match effect {
            EffectTag::Shield => Some(Self::Shield),
            EffectTag::Stun => Some(Self::Stunned),
            EffectTag::Disarm => Some(Self::Disarmed),
            EffectTag::Knockback => Some(Self::KnockedBack),
            EffectTag::None | EffectTag::Illumination | EffectTag::Heal => None,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Active status effects on a combatant.
///
/// # Invariants
///
/// - Each kind appears at most once
/// - Entries keep application order, which is the display order
///
/// Keeping a single ordered list means "flag is set" and "label is listed"
/// can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffectKind, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects.contains(&kind)
    }

    /// Adds a status effect.
    ///
    /// Returns false if the effect was already active (nothing changes).
    pub fn add(&mut self, kind: StatusEffectKind) -> bool {
        if self.has(kind) {
            return false;
        }
        // Capacity equals the number of kinds, so a new kind always fits.
        self.effects.try_push(kind).is_ok()
    }

    /// Removes a status effect immediately.
    ///
    /// Returns true if the effect was active.
    pub fn remove(&mut self, kind: StatusEffectKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| *e != kind);
        self.effects.len() != before
    }

    /// Removes every status effect.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Iterates active effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = StatusEffectKind> + '_ {
        self.effects.iter().copied()
    }

    /// Display labels in application order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(StatusEffectKind::label)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reapplying_an_effect_does_not_duplicate_it() {
        let mut status = StatusEffects::empty();
        assert!(status.add(StatusEffectKind::Stunned));
        assert!(!status.add(StatusEffectKind::Stunned));

        assert_eq!(status.len(), 1);
        assert_eq!(status.labels().collect::<Vec<_>>(), ["Stunned"]);
    }

    #[test]
    fn labels_follow_application_order() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffectKind::KnockedBack);
        status.add(StatusEffectKind::Shield);
        status.add(StatusEffectKind::Disarmed);

        assert_eq!(
            status.labels().collect::<Vec<_>>(),
            ["Knocked Back", "Shield", "Disarmed"]
        );
    }

    #[test]
    fn all_kinds_fit_at_once() {
        let mut status = StatusEffects::empty();
        for kind in [
            StatusEffectKind::Shield,
            StatusEffectKind::Stunned,
            StatusEffectKind::Disarmed,
            StatusEffectKind::KnockedBack,
        ] {
            assert!(status.add(kind));
        }
        assert_eq!(status.len(), GameConfig::MAX_STATUS_EFFECTS);
    }

    #[test]
    fn remove_and_clear() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffectKind::Shield);
        status.add(StatusEffectKind::Stunned);

        assert!(status.remove(StatusEffectKind::Shield));
        assert!(!status.remove(StatusEffectKind::Shield));
        assert!(status.has(StatusEffectKind::Stunned));

        status.clear();
        assert!(status.is_empty());
    }

    #[test]
    fn effect_tags_map_to_statuses() {
        assert_eq!(
            StatusEffectKind::from_effect(EffectTag::Knockback),
            Some(StatusEffectKind::KnockedBack)
        );
        assert_eq!(StatusEffectKind::from_effect(EffectTag::Heal), None);
        assert_eq!("knocked back".parse(), Ok(StatusEffectKind::KnockedBack));
    }
}
