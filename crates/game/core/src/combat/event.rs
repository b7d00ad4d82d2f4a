//! Structured duel events.
//!
//! The orchestrator never formats text. Every observable step of a round is
//! reported as a [`DuelEvent`] and presentation layers render them.

use super::cast::CastFailure;
use crate::spell::EffectTag;

/// Which participant an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Duel state machine: `Ongoing` until exactly one terminal state is reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelStatus {
    #[default]
    Ongoing,
    PlayerWon,
    PlayerLost,
}

impl DuelStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelEvent {
    /// A spell went off (mana spent).
    SpellCast { caster: Side, spell: String },

    /// A spell was attempted but did not go off.
    CastFailed {
        caster: Side,
        spell: String,
        reason: CastFailure,
    },

    /// Damage landed. `dealt` is after mitigation (shield).
    DamageDealt { target: Side, raw: u32, dealt: u32 },

    /// A spell's effect resolved; `effect` is never `EffectTag::None`.
    EffectApplied { caster: Side, effect: EffectTag },

    /// Health actually restored by a heal spell.
    Healed { target: Side, amount: u32 },

    /// The opponent could afford nothing this round.
    OpponentSkipped,

    /// Neither side can deal damage any more; the duel is called.
    Stalemate,

    /// The player yielded.
    Forfeit,

    Victory { house_points: i32 },

    Defeat { house_points: i32 },

    /// Post-duel recovery actually applied to the player.
    Recovered { health: u32, mana: u32 },
}

/// Everything that happened during one player action and the reply to it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub round: u32,
    pub events: Vec<DuelEvent>,
    pub status: DuelStatus,
}

/// Summary of a finished duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelOutcome {
    pub opponent: String,
    pub status: DuelStatus,
    pub rounds: u32,
    /// House points applied to the player by the result.
    pub house_points: i32,
}

impl DuelOutcome {
    pub fn player_won(&self) -> bool {
        self.status == DuelStatus::PlayerWon
    }
}
