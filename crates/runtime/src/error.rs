//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from repositories, content loading and the core rules so
//! clients can bubble them up with consistent context.

use game_core::{CatalogError, DuelError, ErrorSeverity, GameError, ProgressionError, RecordError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load game content: {0}")]
    Content(String),

    #[error("starting spell is unavailable")]
    StartingSpell(#[source] CatalogError),

    #[error("no save found in slot '{slot}'")]
    SaveNotFound { slot: String },

    #[error("saved player cannot be restored")]
    Record(#[from] RecordError),

    #[error("no opponent at index {index} ({available} available)")]
    NoSuchOpponent { index: usize, available: usize },

    #[error(transparent)]
    Duel(#[from] DuelError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

impl RuntimeError {
    /// Severity of the underlying failure, for deciding whether to retry.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Record(e) => e.severity(),
            Self::Duel(e) => e.severity(),
            Self::Progression(e) => e.severity(),
            Self::NoSuchOpponent { .. } | Self::SaveNotFound { .. } => ErrorSeverity::Validation,
            Self::Repository(RepositoryError::InvalidSlot(_)) => ErrorSeverity::Validation,
            Self::Repository(_) | Self::Content(_) | Self::StartingSpell(_) => {
                ErrorSeverity::Fatal
            }
        }
    }
}
