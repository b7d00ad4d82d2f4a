//! The player character.

use super::combatant::Combatant;
use super::status::StatusEffectKind;
use crate::spell::Spell;

/// School house, chosen by the sorting hat.
///
/// Each house fixes the player's maximum health and mana.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum House {
    /// Brave: more health.
    Gryffindor,
    /// Cunning: more mana.
    Slytherin,
    /// Balanced.
    Hufflepuff,
    /// Wise: most mana.
    Ravenclaw,
}

impl House {
    /// Maximum health for members of this house.
    pub const fn max_health(self) -> u32 {
        match self {
            Self::Gryffindor => 120,
            Self::Slytherin => 100,
            Self::Hufflepuff => 110,
            Self::Ravenclaw => 90,
        }
    }

    /// Maximum mana for members of this house.
    pub const fn max_mana(self) -> u32 {
        match self {
            Self::Gryffindor => 100,
            Self::Slytherin => 120,
            Self::Hufflepuff => 110,
            Self::Ravenclaw => 130,
        }
    }
}

/// The player: a combatant plus school progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    combatant: Combatant,
    house: House,
    knowledge: u32,
    house_points: i32,
    inventory: Vec<String>,
}

impl Player {
    /// Creates a fresh first-year with the house's stats and an empty inventory.
    pub fn new(name: impl Into<String>, house: House) -> Self {
        Self {
            combatant: Combatant::new(name, house.max_health(), house.max_mana()),
            house,
            knowledge: 0,
            house_points: 0,
            inventory: Vec::new(),
        }
    }

    /// Reassembles a player from stored parts.
    pub(crate) fn from_parts(
        combatant: Combatant,
        house: House,
        knowledge: u32,
        house_points: i32,
        inventory: Vec<String>,
    ) -> Self {
        Self {
            combatant,
            house,
            knowledge,
            house_points,
            inventory,
        }
    }

    /// Replaces the inventory (builder pattern).
    #[must_use]
    pub fn with_inventory<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inventory = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        self.combatant.name()
    }

    pub fn house(&self) -> House {
        self.house
    }

    pub fn knowledge(&self) -> u32 {
        self.knowledge
    }

    pub fn house_points(&self) -> i32 {
        self.house_points
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    /// Learns a spell if not already known.
    ///
    /// Returns false if the spell was already known.
    pub fn learn_spell(&mut self, spell: Spell) -> bool {
        self.combatant.learn_spell(spell)
    }

    /// Knowledge only ever grows.
    pub fn gain_knowledge(&mut self, amount: u32) {
        self.knowledge = self.knowledge.saturating_add(amount);
    }

    /// Awards (positive) or deducts (negative) house points.
    pub fn award_house_points(&mut self, points: i32) {
        self.house_points = self.house_points.saturating_add(points);
    }

    /// Stat sheet for display.
    pub fn stats(&self) -> PlayerStats {
        let c = &self.combatant;
        PlayerStats {
            name: c.name().to_string(),
            house: self.house,
            health: c.health(),
            max_health: c.max_health(),
            mana: c.mana(),
            max_mana: c.max_mana(),
            knowledge: self.knowledge,
            house_points: self.house_points,
            known_spells: c.known_spells().iter().map(|s| s.name.clone()).collect(),
            inventory: self.inventory.clone(),
            status_effects: c.status_effects().iter().collect(),
        }
    }
}

/// Read-only view of a player's stats, shaped for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub name: String,
    pub house: House,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub knowledge: u32,
    pub house_points: i32,
    pub known_spells: Vec<String>,
    pub inventory: Vec<String>,
    pub status_effects: Vec<StatusEffectKind>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::spell::SpellCatalog;

    #[test]
    fn player_starts_with_house_stats() {
        let player = Player::new("Test Wizard", House::Gryffindor);
        assert_eq!(player.name(), "Test Wizard");
        assert_eq!(player.house(), House::Gryffindor);
        assert_eq!(player.combatant().health(), 120);
        assert_eq!(player.combatant().mana(), 100);
        assert_eq!(player.knowledge(), 0);
        assert_eq!(player.house_points(), 0);
        assert!(player.combatant().known_spells().is_empty());
    }

    #[test]
    fn every_house_has_distinct_profile() {
        let profiles: Vec<_> = House::iter()
            .map(|h| (h.max_health(), h.max_mana()))
            .collect();
        assert_eq!(profiles, [(120, 100), (100, 120), (110, 110), (90, 130)]);
    }

    #[test]
    fn house_parses_case_insensitively() {
        assert_eq!("ravenclaw".parse::<House>().unwrap(), House::Ravenclaw);
        assert_eq!(House::Hufflepuff.to_string(), "Hufflepuff");
        assert!("Durmstrang".parse::<House>().is_err());
    }

    #[test]
    fn learning_same_spell_twice_fails() {
        let catalog = SpellCatalog::standard();
        let mut player = Player::new("Test Wizard", House::Gryffindor);
        let lumos = catalog.get("lumos").unwrap().clone();

        assert!(player.learn_spell(lumos.clone()));
        assert!(!player.learn_spell(lumos));
    }

    #[test]
    fn house_points_may_go_negative() {
        let mut player = Player::new("Test Wizard", House::Slytherin);
        player.award_house_points(5);
        player.award_house_points(-15);
        assert_eq!(player.house_points(), -10);
    }

    #[test]
    fn stats_sheet_reflects_state() {
        let catalog = SpellCatalog::standard();
        let mut player =
            Player::new("Test Wizard", House::Hufflepuff).with_inventory(["Wand", "Textbooks"]);
        player.learn_spell(catalog.get("protego").unwrap().clone());
        player.gain_knowledge(10);
        player
            .combatant_mut()
            .apply_effect(StatusEffectKind::Shield);

        let stats = player.stats();
        assert_eq!(stats.max_health, 110);
        assert_eq!(stats.knowledge, 10);
        assert_eq!(stats.known_spells, ["Protego"]);
        assert_eq!(stats.inventory, ["Wand", "Textbooks"]);
        assert_eq!(stats.status_effects, [StatusEffectKind::Shield]);
    }
}
