//! Resource domain types
//!
//! A resource is a named, orderable external value source contributed by a
//! configuration unit.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, resource};

/// Opaque reference to the resolved content of a resource
///
/// Holds the fully resolved location (placeholders substituted); the
/// ordering logic never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn location(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resource contributed by a configuration unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resource {
    /// Resolved content reference
    pub handle: ResourceHandle,

    /// Key used to find the resource in the live property source collection
    pub name: String,

    /// Location as originally declared (informational only)
    pub origin: String,
}

impl Resource {
    pub fn new(
        handle: impl Into<String>,
        name: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            handle: ResourceHandle::new(handle),
            name: name.into(),
            origin: origin.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(resource::invalid(format!(
                "resource declared at '{}' has an empty name",
                self.origin
            )));
        }
        if self.handle.location().is_empty() {
            return Err(resource::invalid(format!(
                "resource '{}' has an empty location",
                self.name
            )));
        }
        Ok(())
    }
}
