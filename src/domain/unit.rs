//! Configuration unit domain types
//!
//! A unit is a configuration-declaring entity: it is addressable through a set
//! of provided types, imports other units by type, and contributes an ordered
//! list of resources.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use serde::Serialize;

use crate::domain::Resource;
use crate::error::{Result, resource as resource_error, unit};

/// Identity of a type (e.g. a fully qualified type name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A configuration unit
///
/// Equality and hashing consider the identity only.
#[derive(Debug, Clone)]
pub struct Unit {
    identity: TypeName,
    provided_types: IndexSet<TypeName>,
    direct_imports: IndexSet<TypeName>,
    resources: Vec<Resource>,
}

impl Unit {
    pub fn builder(identity: impl Into<TypeName>) -> UnitBuilder {
        UnitBuilder::new(identity)
    }

    pub fn identity(&self) -> &TypeName {
        &self.identity
    }

    /// Types this unit can be imported through: itself first, then every
    /// transitive supertype
    pub fn provided_types(&self) -> &IndexSet<TypeName> {
        &self.provided_types
    }

    pub fn direct_imports(&self) -> &IndexSet<TypeName> {
        &self.direct_imports
    }

    /// Contributed resources, last declared first
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit[{}]", self.identity)
    }
}

/// Builder collecting a unit's declarations before freezing them
#[derive(Debug, Clone)]
pub struct UnitBuilder {
    identity: TypeName,
    supertypes: Vec<TypeName>,
    imports: Vec<TypeName>,
    declared_resources: Vec<Resource>,
}

impl UnitBuilder {
    pub fn new(identity: impl Into<TypeName>) -> Self {
        Self {
            identity: identity.into(),
            supertypes: Vec::new(),
            imports: Vec::new(),
            declared_resources: Vec::new(),
        }
    }

    /// Add a type this unit is also addressable as
    #[must_use]
    pub fn provides(mut self, type_name: impl Into<TypeName>) -> Self {
        self.supertypes.push(type_name.into());
        self
    }

    #[must_use]
    pub fn provides_all<I, T>(mut self, type_names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.supertypes
            .extend(type_names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn imports(mut self, type_name: impl Into<TypeName>) -> Self {
        self.imports.push(type_name.into());
        self
    }

    #[must_use]
    pub fn imports_all<I, T>(mut self, type_names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.imports.extend(type_names.into_iter().map(Into::into));
        self
    }

    /// Add a resource in declaration order
    #[must_use]
    pub fn resource(mut self, resource: Resource) -> Self {
        self.declared_resources.push(resource);
        self
    }

    #[must_use]
    pub fn resources<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = Resource>,
    {
        self.declared_resources.extend(resources);
        self
    }

    /// Freeze the declarations into a [`Unit`]
    ///
    /// Resources are stored reversed: among repeated declarations the last
    /// one wins, so it must come first. Duplicates keep their first position
    /// after the reversal.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is empty or a resource is malformed.
    pub fn build(self) -> Result<Unit> {
        if self.identity.as_str().trim().is_empty() {
            return Err(unit::invalid(
                self.identity.as_str(),
                "identity must not be empty",
            ));
        }

        for resource in &self.declared_resources {
            resource
                .validate()
                .map_err(|e| resource_error::in_unit(e, self.identity.as_str()))?;
        }

        let mut provided_types = IndexSet::with_capacity(self.supertypes.len() + 1);
        provided_types.insert(self.identity.clone());
        provided_types.extend(self.supertypes);

        let resources: IndexSet<Resource> = self.declared_resources.into_iter().rev().collect();

        Ok(Unit {
            identity: self.identity,
            provided_types,
            direct_imports: self.imports.into_iter().collect(),
            resources: resources.into_iter().collect(),
        })
    }
}
