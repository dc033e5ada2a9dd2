//! Manifest (precedence.yaml)
//!
//! Describes everything a host would otherwise discover at runtime:
//!
//! ```yaml
//! properties:
//!   profile: prod
//! types:
//!   - name: org.lib.Marker
//!     extends: [org.lib.Base]
//! units:
//!   - name: org.app.App
//!     extends: [org.lib.Marker]
//!     imports: [org.app.Config5]
//!     property_sources:
//!       - locations: ["classpath:app-${profile}.properties"]
//! sources:
//!   - name: systemProperties
//!     kind: programmatic
//!   - name: "class path resource [app-prod.properties]"
//!     properties:
//!       key: value
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, config};
use crate::precedence::{PropertySource, PropertySources};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "precedence.yaml";

/// Root of the manifest file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Values available to placeholders in resource locations
    #[serde(
        default,
        deserialize_with = "crate::config::serialization::scalar_map",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub properties: IndexMap<String, String>,

    /// Library types that are not units themselves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeDeclaration>,

    /// Configuration units
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<UnitDeclaration>,

    /// Live property sources, highest priority first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<PropertySource>,
}

/// A type and its direct supertypes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDeclaration {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
}

/// A configuration unit as declared in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitDeclaration {
    /// Unit identity (fully qualified type name)
    pub name: String,

    /// Direct supertypes and interfaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Imported types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Property source declarations, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_sources: Vec<PropertySourceDeclaration>,
}

/// One property source declaration, possibly naming several locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySourceDeclaration {
    /// Explicit name; defaults to the resource description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw locations, may contain `${...}` placeholders
    #[serde(alias = "value")]
    pub locations: Vec<String>,
}

impl PropertySourceDeclaration {
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            locations: locations.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit name if present and non-blank
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

impl Manifest {
    /// Load and validate a manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, malformed or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        let manifest: Self = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse manifest from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate structural rules that serde cannot express
    ///
    /// Unit identities are checked during discovery, where a malformed unit
    /// aborts the pass.
    pub fn validate(&self) -> Result<()> {
        for declared in &self.types {
            if declared.name.trim().is_empty() {
                return Err(config::invalid("type declarations require a name"));
            }
        }

        for unit in &self.units {
            for declaration in &unit.property_sources {
                if declaration.locations.is_empty() {
                    return Err(config::invalid(format!(
                        "property source declaration of '{}' has no locations",
                        unit.name
                    )));
                }
            }
        }

        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(config::invalid("live property sources require a name"));
            }
        }

        Ok(())
    }

    /// Materialize the declared live property sources
    ///
    /// # Errors
    ///
    /// Returns an error if two sources share a name.
    pub fn live_sources(&self) -> Result<PropertySources> {
        PropertySources::from_sources(self.sources.iter().cloned())
    }
}
