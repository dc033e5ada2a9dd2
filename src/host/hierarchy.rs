//! Type hierarchy
//!
//! Records direct supertype edges and expands them into the full set of
//! types a unit can be imported through.

use indexmap::{IndexMap, IndexSet};

use crate::config::Manifest;
use crate::domain::TypeName;

/// Direct supertype edges between types
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    supertypes: IndexMap<TypeName, Vec<TypeName>>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hierarchy declared by a manifest's library types and units
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut hierarchy = Self::new();
        for declared in &manifest.types {
            hierarchy.declare(declared.name.as_str(), declared.extends.iter().map(String::as_str));
        }
        for unit in &manifest.units {
            hierarchy.declare(unit.name.as_str(), unit.extends.iter().map(String::as_str));
        }
        hierarchy
    }

    /// Record direct supertypes of `name`, appending to earlier declarations
    pub fn declare<I, T>(&mut self, name: impl Into<TypeName>, supertypes: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let entry = self.supertypes.entry(name.into()).or_default();
        for supertype in supertypes {
            let supertype = supertype.into();
            if !entry.contains(&supertype) {
                entry.push(supertype);
            }
        }
    }

    pub fn direct_supertypes(&self, name: &str) -> &[TypeName] {
        self.supertypes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `name` followed by all of its transitive supertypes
    ///
    /// Depth-first in declaration order; a type reachable along several
    /// paths is listed once. Cyclic declarations terminate.
    ///
    /// # Example
    ///
    /// ```text
    /// App extends [Base, Marker]
    /// Base extends [Root]
    ///
    /// provided_types(App) = [App, Base, Root, Marker]
    /// ```
    pub fn provided_types(&self, name: &str) -> IndexSet<TypeName> {
        let mut types = IndexSet::new();
        self.collect(&TypeName::from(name), &mut types);
        types
    }

    fn collect(&self, name: &TypeName, types: &mut IndexSet<TypeName>) {
        if !types.insert(name.clone()) {
            return;
        }
        for supertype in self.direct_supertypes(name.as_str()) {
            self.collect(supertype, types);
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn names(types: &IndexSet<TypeName>) -> Vec<&str> {
        types.iter().map(TypeName::as_str).collect()
    }

    #[test]
    fn test_unknown_type_provides_itself() {
        let hierarchy = TypeHierarchy::new();
        assert_eq!(names(&hierarchy.provided_types("App")), vec!["App"]);
    }

    #[test]
    fn test_transitive_supertypes_depth_first() {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.declare("App", ["Base", "Marker"]);
        hierarchy.declare("Base", ["Root"]);

        assert_eq!(
            names(&hierarchy.provided_types("App")),
            vec!["App", "Base", "Root", "Marker"]
        );
    }

    #[test]
    fn test_diamond_listed_once() {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.declare("App", ["Left", "Right"]);
        hierarchy.declare("Left", ["Root"]);
        hierarchy.declare("Right", ["Root"]);

        assert_eq!(
            names(&hierarchy.provided_types("App")),
            vec!["App", "Left", "Root", "Right"]
        );
    }

    #[test]
    fn test_cyclic_declarations_terminate() {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.declare("A", ["B"]);
        hierarchy.declare("B", ["A"]);

        assert_eq!(names(&hierarchy.provided_types("A")), vec!["A", "B"]);
    }

    #[test]
    fn test_repeated_declarations_merge() {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.declare("A", ["B"]);
        hierarchy.declare("A", ["B", "C"]);

        let direct: Vec<&str> = hierarchy
            .direct_supertypes("A")
            .iter()
            .map(TypeName::as_str)
            .collect();
        assert_eq!(direct, vec!["B", "C"]);
    }

    #[test]
    fn test_from_manifest() {
        let manifest = Manifest::from_yaml(
            "types:\n  - name: Marker\n    extends: [Root]\nunits:\n  - name: App\n    extends: [Marker]\n",
        )
        .expect("manifest should parse");
        let hierarchy = TypeHierarchy::from_manifest(&manifest);

        assert_eq!(
            names(&hierarchy.provided_types("App")),
            vec!["App", "Marker", "Root"]
        );
    }
}
