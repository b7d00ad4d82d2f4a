//! Activities outside of duels: classes, exploration, practice casting and
//! the sorting hat.
//!
//! Every operation takes the RNG and rule values explicitly and returns a
//! structured outcome; nothing here prints.

pub mod class;
pub mod explore;
pub mod practice;
pub mod sorting;

pub use class::{ClassOutcome, attend_class};
pub use explore::{EventTable, ExploreOutcome, RandomEvent, explore};
pub use practice::{PracticeReport, practice_cast};
pub use sorting::{SortingHat, SortingOption, SortingQuestion, SortingQuiz};

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by progression activities.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("spell index {index} is out of range (player knows {known} spells)")]
    SpellIndexOutOfRange { index: usize, known: usize },

    #[error("the exploration event table is empty")]
    NoEvents,
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SpellIndexOutOfRange { .. } => ErrorSeverity::Validation,
            Self::NoEvents => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpellIndexOutOfRange { .. } => "PROGRESSION_SPELL_INDEX_OUT_OF_RANGE",
            Self::NoEvents => "PROGRESSION_NO_EVENTS",
        }
    }
}
