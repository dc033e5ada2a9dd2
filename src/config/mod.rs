//! Configuration file handling for precedence
//!
//! This module contains data structures for:
//! - `precedence.yaml` - Manifest describing configuration units, library
//!   types, placeholder properties and the live property sources

pub mod manifest;
pub mod serialization;

// Re-export commonly used types
pub use manifest::{
    MANIFEST_FILE, Manifest, PropertySourceDeclaration, TypeDeclaration, UnitDeclaration,
};
