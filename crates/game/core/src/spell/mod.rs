//! Spell definitions and the catalog that registers them.
//!
//! Spells are immutable values. The catalog owns the canonical definitions
//! and combatants hold their own copies in `known_spells`.

pub mod catalog;

pub use catalog::{CatalogError, SpellCatalog};

/// Side-effect category attached to a spell.
///
/// The lowercase name (`"stun"`, `"shield"`, ...) is also the effect message
/// returned by a successful cast.
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
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EffectTag {
    /// No side effect.
    #[default]
    None,
    /// Light source, purely cosmetic.
    Illumination,
    /// Applies `Disarmed` to the target.
    Disarm,
    /// Applies `Stunned` to the target.
    Stun,
    /// Applies `Shield` to the caster.
    Shield,
    /// Applies `Knocked Back` to the target.
    Knockback,
    /// Restores the caster's health (applied by the caller).
    Heal,
}

impl EffectTag {
    /// Message reported for this effect, or `None` for spells without one.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            other => Some(other.into()),
        }
    }
}

/// A spell definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    pub mana_cost: u32,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: EffectTag,
}

impl Spell {
    /// Creates a spell with no damage and no effect.
    pub fn new(name: impl Into<String>, mana_cost: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            description: description.into(),
            damage: 0,
            effect: EffectTag::None,
        }
    }

    /// Sets the raw damage (builder pattern).
    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// Sets the effect tag (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectTag) -> Self {
        self.effect = effect;
        self
    }

    /// Catalog key: the lowercase name.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns true if a caster with `mana` can afford this spell.
    #[inline]
    pub fn is_castable_with(&self, mana: u32) -> bool {
        self.mana_cost <= mana
    }

    /// Returns true if this spell deals direct damage.
    #[inline]
    pub fn is_damaging(&self) -> bool {
        self.damage > 0
    }
}

impl core::fmt::Display for Spell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (Mana: {}) - {}",
            self.name, self.mana_cost, self.description
        )
    }
}
