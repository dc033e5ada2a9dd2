//! Live property source collection errors

use super::PrecedenceError;

/// Creates a source not found error
pub fn not_found(name: impl Into<String>) -> PrecedenceError {
    PrecedenceError::SourceNotFound { name: name.into() }
}

/// Creates a duplicate source error
pub fn duplicate(name: impl Into<String>) -> PrecedenceError {
    PrecedenceError::DuplicateSource { name: name.into() }
}

/// Creates an error for a move anchored on the moved source itself
pub fn relative_to_itself(name: impl Into<String>) -> PrecedenceError {
    PrecedenceError::InvalidRelativeSource { name: name.into() }
}

/// Creates an error for a key no property source defines
pub fn property_not_found(key: impl Into<String>) -> PrecedenceError {
    PrecedenceError::PropertyNotFound { key: key.into() }
}
