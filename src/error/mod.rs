//! Error types and handling for precedence
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Manifest loading errors
//! - [`unit`]: Configuration unit errors
//! - [`resource`]: Resource resolution errors
//! - [`sources`]: Live property source collection errors
//!
//! Graph ambiguity and missing live resources are not errors: they are
//! expected, data-dependent conditions handled where they occur.

pub mod config;
pub mod resource;
pub mod sources;
pub mod unit;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for precedence operations
#[derive(Error, Diagnostic, Debug)]
pub enum PrecedenceError {
    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(precedence::config::not_found),
        help("Pass --manifest <path> or create precedence.yaml in the current directory")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(precedence::config::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(precedence::config::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(precedence::config::invalid))]
    ManifestInvalid { message: String },

    // Unit errors
    #[error("Invalid configuration unit '{unit}': {reason}")]
    #[diagnostic(code(precedence::unit::invalid))]
    InvalidUnit { unit: String, reason: String },

    #[error("Configuration unit '{identity}' is declared more than once")]
    #[diagnostic(
        code(precedence::unit::duplicate),
        help("Unit identities must be unique within one ordering pass")
    )]
    DuplicateUnit { identity: String },

    #[error("Unit '{unit}' declares property sources but no resource resolver was supplied")]
    #[diagnostic(
        code(precedence::unit::missing_resolver),
        help("Attach a resolver with UnitDiscovery::with_resolver before discovering units")
    )]
    MissingResolver { unit: String },

    // Resource errors
    #[error(
        "Could not resolve placeholder '{placeholder}' in location '{location}'{}",
        unit_suffix(.unit.as_deref())
    )]
    #[diagnostic(
        code(precedence::resource::unresolvable_placeholder),
        help("Define the key under `properties:` in the manifest or as an environment variable")
    )]
    UnresolvablePlaceholder {
        placeholder: String,
        location: String,
        unit: Option<String>,
    },

    #[error("Invalid resource declaration: {message}{}", unit_suffix(.unit.as_deref()))]
    #[diagnostic(code(precedence::resource::invalid))]
    InvalidResource {
        message: String,
        unit: Option<String>,
    },

    // Property source errors
    #[error("Property source '{name}' does not exist")]
    #[diagnostic(code(precedence::sources::not_found))]
    SourceNotFound { name: String },

    #[error("Property source '{name}' is registered more than once")]
    #[diagnostic(
        code(precedence::sources::duplicate),
        help("Property source names must be unique within the live collection")
    )]
    DuplicateSource { name: String },

    #[error("Property source '{name}' cannot be added relative to itself")]
    #[diagnostic(code(precedence::sources::relative_to_itself))]
    InvalidRelativeSource { name: String },

    #[error("Property '{key}' is not defined by any property source")]
    #[diagnostic(
        code(precedence::sources::property_not_found),
        help("Add the key to one of the `sources:` entries in the manifest")
    )]
    PropertyNotFound { key: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(precedence::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PrecedenceError {
    fn from(err: std::io::Error) -> Self {
        PrecedenceError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PrecedenceError {
    fn from(err: serde_yaml::Error) -> Self {
        PrecedenceError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PrecedenceError {
    fn from(err: serde_json::Error) -> Self {
        PrecedenceError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

fn unit_suffix(unit: Option<&str>) -> String {
    unit.map(|unit| format!(" (declared by unit '{unit}')"))
        .unwrap_or_default()
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PrecedenceError>;
