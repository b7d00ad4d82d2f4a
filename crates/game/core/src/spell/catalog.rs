//! Spell catalog keyed by lowercase name.

use std::collections::HashMap;

use super::{EffectTag, Spell};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while building or querying a [`SpellCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("spell '{name}' is already registered")]
    DuplicateSpell { name: String },

    #[error("spell '{name}' is not in the catalog")]
    UnknownSpell { name: String },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSpell { .. } => "CATALOG_DUPLICATE_SPELL",
            Self::UnknownSpell { .. } => "CATALOG_UNKNOWN_SPELL",
        }
    }
}

/// Static registry of spell definitions.
///
/// # Invariants
///
/// - Entries are keyed by lowercase name, so lookups are case-insensitive
/// - Iteration follows registration order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
    index: HashMap<String, usize>,
}

impl SpellCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of spells, rejecting duplicate names.
    pub fn from_spells(spells: impl IntoIterator<Item = Spell>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for spell in spells {
            catalog.insert(spell)?;
        }
        Ok(catalog)
    }

    /// The six spells taught at school.
    pub fn standard() -> Self {
        let spells = [
            Spell::new("Lumos", 5, "Creates a bright light from your wand")
                .with_effect(EffectTag::Illumination),
            Spell::new("Expelliarmus", 20, "Disarms your opponent")
                .with_damage(15)
                .with_effect(EffectTag::Disarm),
            Spell::new("Stupefy", 25, "Stuns your opponent")
                .with_damage(20)
                .with_effect(EffectTag::Stun),
            Spell::new("Protego", 15, "Creates a magical shield to protect yourself")
                .with_effect(EffectTag::Shield),
            Spell::new("Flipendo", 18, "Knocks back your opponent")
                .with_damage(12)
                .with_effect(EffectTag::Knockback),
            Spell::new("Episkey", 30, "Heals minor to moderate injuries")
                .with_effect(EffectTag::Heal),
        ];

        let mut catalog = Self::new();
        for spell in spells {
            let key = spell.key();
            catalog.index.insert(key, catalog.spells.len());
            catalog.spells.push(spell);
        }
        catalog
    }

    /// Registers a spell.
    pub fn insert(&mut self, spell: Spell) -> Result<(), CatalogError> {
        let key = spell.key();
        if self.index.contains_key(&key) {
            return Err(CatalogError::DuplicateSpell { name: spell.name });
        }
        self.index.insert(key, self.spells.len());
        self.spells.push(spell);
        Ok(())
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Spell> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| &self.spells[slot])
    }

    /// Case-insensitive lookup that reports unknown names as an error.
    pub fn require(&self, name: &str) -> Result<&Spell, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::UnknownSpell {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Iterates spells in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}
