//! Manifest (configuration) errors

use super::PrecedenceError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> PrecedenceError {
    PrecedenceError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PrecedenceError {
    PrecedenceError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PrecedenceError {
    PrecedenceError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> PrecedenceError {
    PrecedenceError::ManifestInvalid {
        message: message.into(),
    }
}
