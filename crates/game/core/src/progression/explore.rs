//! Exploring the castle.

use rand::Rng;
use rand::seq::SliceRandom;

use super::ProgressionError;
use crate::config::ProgressionRules;
use crate::state::Player;

/// Something that happens while exploring, with its house point effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomEvent {
    pub description: String,
    pub points: i32,
}

impl RandomEvent {
    pub fn new(description: impl Into<String>, points: i32) -> Self {
        Self {
            description: description.into(),
            points,
        }
    }
}

/// Pool of exploration events, drawn uniformly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventTable {
    events: Vec<RandomEvent>,
}

impl EventTable {
    pub fn new(events: Vec<RandomEvent>) -> Self {
        Self { events }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            RandomEvent::new("You found a secret passage!", 10),
            RandomEvent::new("You helped a lost first-year student.", 5),
            RandomEvent::new("You discovered a magical artifact!", 15),
            RandomEvent::new("You were caught out after curfew!", -10),
            RandomEvent::new("You successfully answered a riddle from a portrait.", 5),
            RandomEvent::new("You found and returned a lost wand.", 10),
            RandomEvent::new("You accidentally set off a dungbomb!", -5),
            RandomEvent::new("You helped Hagrid with magical creatures.", 15),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RandomEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploreOutcome {
    pub event: RandomEvent,
    /// Amount rolled from the configured range.
    pub mana_rolled: u32,
    /// Amount actually restored after capping at max mana.
    pub mana_restored: u32,
}

/// Draws an event, applies its points and restores a random amount of mana.
pub fn explore<R: Rng + ?Sized>(
    player: &mut Player,
    table: &EventTable,
    rules: &ProgressionRules,
    rng: &mut R,
) -> Result<ExploreOutcome, ProgressionError> {
    let event = table
        .events
        .choose(rng)
        .cloned()
        .ok_or(ProgressionError::NoEvents)?;
    player.award_house_points(event.points);

    let (low, high) = if rules.explore_mana_min <= rules.explore_mana_max {
        (rules.explore_mana_min, rules.explore_mana_max)
    } else {
        (rules.explore_mana_max, rules.explore_mana_min)
    };
    let mana_rolled = rng.gen_range(low..=high);

    let before = player.combatant().mana();
    player.combatant_mut().restore_mana(mana_rolled);
    let mana_restored = player.combatant().mana() - before;

    Ok(ExploreOutcome {
        event,
        mana_rolled,
        mana_restored,
    })
}
