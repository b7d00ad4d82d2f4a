//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `CatalogError`, `DuelError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! Note that ordinary duel outcomes such as "Not enough mana!" are *not* errors:
//! they are returned as [`crate::combat::CastFailure`] values so a turn can continue.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors, e.g. a save record that cannot be restored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: spell index out of range, duplicate spell name
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: acting in a duel that already finished
    Internal,

    /// Cannot continue with this data.
    ///
    /// Examples: persisted record with an unknown house
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_are_stable() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
