//! Error types for cookbook_core.

use serde::Serialize;
use thiserror::Error;

/// Result type alias using cookbook_core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cookbook operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Payload has the wrong shape or types.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// An entry with this name already exists.
    #[error("Duplicate entry name: {name}")]
    DuplicateName { name: String },

    /// Entry not found in the cookbook.
    #[error("Entry not found: {name}")]
    NotFound { name: String },

    /// Entry exists but has the wrong kind.
    #[error("Wrong entry type for {name}: expected {expected}, got {got}")]
    WrongType {
        name: String,
        expected: String,
        got: String,
    },

    /// Expansion re-entered a recipe on its own path or ran past its limits.
    #[error("Expansion of {name} aborted: {reason}")]
    CycleOrDepthExceeded { name: String, reason: String },

    /// Quantity or cook time arithmetic overflowed.
    #[error("Quantity overflow while expanding {name}")]
    QuantityOverflow { name: String },

    /// The store lock was poisoned by a panicking holder.
    #[error("Cookbook lock poisoned during {operation}")]
    LockPoisoned { operation: &'static str },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    DuplicateName,
    NotFound,
    WrongType,
    CycleOrDepthExceeded,
    Overflow,
    Internal,
}

impl Error {
    /// Create an InvalidInput error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a DuplicateName error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Error::DuplicateName { name: name.into() }
    }

    /// Create a NotFound error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound { name: name.into() }
    }

    /// Create a WrongType error.
    pub fn wrong_type(
        name: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Error::WrongType {
            name: name.into(),
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Create a CycleOrDepthExceeded error.
    pub fn cycle_or_depth(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::CycleOrDepthExceeded {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a QuantityOverflow error.
    pub fn quantity_overflow(name: impl Into<String>) -> Self {
        Error::QuantityOverflow { name: name.into() }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::DuplicateName { .. } => ErrorKind::DuplicateName,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::WrongType { .. } => ErrorKind::WrongType,
            Error::CycleOrDepthExceeded { .. } => ErrorKind::CycleOrDepthExceeded,
            Error::QuantityOverflow { .. } => ErrorKind::Overflow,
            Error::LockPoisoned { .. } => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(Error::invalid_input("x").kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::duplicate_name("x").kind(), ErrorKind::DuplicateName);
        assert_eq!(Error::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(
            Error::wrong_type("x", "recipe", "ingredient").kind(),
            ErrorKind::WrongType
        );
        assert_eq!(
            Error::cycle_or_depth("x", "cycle").kind(),
            ErrorKind::CycleOrDepthExceeded
        );
        assert_eq!(Error::quantity_overflow("x").kind(), ErrorKind::Overflow);
        assert_eq!(
            Error::LockPoisoned { operation: "read" }.kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::wrong_type("Egg", "recipe", "ingredient");
        assert_eq!(
            err.to_string(),
            "Wrong entry type for Egg: expected recipe, got ingredient"
        );
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::CycleOrDepthExceeded).unwrap();
        assert_eq!(json, "\"cycle_or_depth_exceeded\"");
    }
}
