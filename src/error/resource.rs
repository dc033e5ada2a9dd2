//! Resource resolution errors

use super::PrecedenceError;

/// Creates an unresolvable placeholder error
pub fn unresolvable_placeholder(
    placeholder: impl Into<String>,
    location: impl Into<String>,
) -> PrecedenceError {
    PrecedenceError::UnresolvablePlaceholder {
        placeholder: placeholder.into(),
        location: location.into(),
        unit: None,
    }
}

/// Creates an invalid resource error
pub fn invalid(message: impl Into<String>) -> PrecedenceError {
    PrecedenceError::InvalidResource {
        message: message.into(),
        unit: None,
    }
}

/// Attributes a resource error to the unit declaring the resource
///
/// Other errors, and resource errors already attributed, pass through
/// unchanged.
pub fn in_unit(err: PrecedenceError, declaring: &str) -> PrecedenceError {
    match err {
        PrecedenceError::UnresolvablePlaceholder {
            placeholder,
            location,
            unit: None,
        } => PrecedenceError::UnresolvablePlaceholder {
            placeholder,
            location,
            unit: Some(declaring.to_string()),
        },
        PrecedenceError::InvalidResource {
            message,
            unit: None,
        } => PrecedenceError::InvalidResource {
            message,
            unit: Some(declaring.to_string()),
        },
        other => other,
    }
}
