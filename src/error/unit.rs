//! Configuration unit errors

use super::PrecedenceError;

/// Creates an invalid unit error
pub fn invalid(unit: impl Into<String>, reason: impl Into<String>) -> PrecedenceError {
    PrecedenceError::InvalidUnit {
        unit: unit.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate unit error
pub fn duplicate(identity: impl Into<String>) -> PrecedenceError {
    PrecedenceError::DuplicateUnit {
        identity: identity.into(),
    }
}

/// Creates a missing resolver error
pub fn missing_resolver(unit: impl Into<String>) -> PrecedenceError {
    PrecedenceError::MissingResolver { unit: unit.into() }
}
