//! Duel resolution.
//!
//! # Architecture
//!
//! - **Resolver** ([`cast`]): one spell from a caster at an optional target
//! - **Behavior** ([`choose_spell`]): how an opponent picks its spell
//! - **Orchestrator** ([`Duel`]): rounds, termination, rewards and recovery
//!
//! Presentation lives elsewhere. Everything here reports through
//! [`DuelEvent`] values.

pub mod behavior;
pub mod cast;
pub mod duel;
pub mod event;

pub use behavior::choose_spell;
pub use cast::{CastFailure, CastOutcome, cast};
pub use duel::{Duel, DuelError, DuelInput, TurnChoice, run_duel};
pub use event::{DuelEvent, DuelOutcome, DuelStatus, Side, TurnReport};
