//! Unit discovery
//!
//! Builds domain [`Unit`]s from manifest declarations: provided types come
//! from the [`TypeHierarchy`], resources from the [`ResourceResolver`].
//! Any malformed declaration aborts discovery; ordering depends on every
//! unit being well-formed.

use std::collections::HashSet;

use crate::analyzer::sort_units;
use crate::config::{Manifest, UnitDeclaration};
use crate::domain::Unit;
use crate::error::{Result, resource, unit};
use crate::host::hierarchy::TypeHierarchy;
use crate::host::resolver::ResourceResolver;

/// Discovers units declared in a manifest
pub struct UnitDiscovery<'m> {
    manifest: &'m Manifest,
    hierarchy: TypeHierarchy,
    resolver: Option<Box<dyn ResourceResolver + 'm>>,
}

impl<'m> UnitDiscovery<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            hierarchy: TypeHierarchy::from_manifest(manifest),
            resolver: None,
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: impl ResourceResolver + 'm) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// All declared units, sorted by identity
    ///
    /// # Errors
    ///
    /// Returns an error if a unit has an empty or repeated identity, if a
    /// unit declares property sources without a resolver attached, or if a
    /// resource fails to resolve.
    pub fn discover(&self) -> Result<Vec<Unit>> {
        let mut seen = HashSet::with_capacity(self.manifest.units.len());
        let mut units = Vec::with_capacity(self.manifest.units.len());

        for declaration in &self.manifest.units {
            if !seen.insert(declaration.name.as_str()) {
                return Err(unit::duplicate(declaration.name.as_str()));
            }
            units.push(self.build_unit(declaration)?);
        }

        Ok(sort_units(&units))
    }

    fn build_unit(&self, declaration: &UnitDeclaration) -> Result<Unit> {
        let mut builder = Unit::builder(declaration.name.as_str())
            .provides_all(self.hierarchy.provided_types(&declaration.name))
            .imports_all(declaration.imports.iter().map(String::as_str));

        if !declaration.property_sources.is_empty() {
            let resolver = self
                .resolver
                .as_deref()
                .ok_or_else(|| unit::missing_resolver(declaration.name.as_str()))?;

            for property_source in &declaration.property_sources {
                let resources = resolver
                    .resolve(property_source)
                    .map_err(|e| resource::in_unit(e, &declaration.name))?;
                builder = builder.resources(resources);
            }
        }

        builder.build()
    }
}
