//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `MoveError`, `TakeError`, `WorldError`) live
//! next to the code that raises them. This module holds the shared
//! classification used to decide how a caller reacts to a failure.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each command has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stable Codes**: Every variant maps to a static code for logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Bad player input; reprompt and try again
/// - **Validation**: The request is well-formed but not allowed in this state
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: The world data is unusable; the game must not start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - reprompt with the same or a different command.
    ///
    /// Examples: unknown direction, item not here, malformed arena move
    Recoverable,

    /// Validation error - rejected because of the current game state.
    ///
    /// Examples: mutating command after the game ended
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: inventory holds a duplicate after a take
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - world definition is inconsistent, cannot continue.
    ///
    /// Examples: exit to a missing location, duplicate item names
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can simply reprompt.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug or corrupt data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
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
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Fatal.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
