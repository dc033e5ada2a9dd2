//! Type ownership index
//!
//! Maps every provided type to the single unit that owns it. A type claimed
//! by two or more units is ambiguous and is dropped from the index, so
//! imports through it resolve to nothing instead of picking an owner.

use std::collections::{HashMap, HashSet};

use crate::domain::Unit;

/// Index from provided type to owning unit (by position in the unit list)
#[derive(Debug, Default)]
pub struct TypeOwnership<'a> {
    owners: HashMap<&'a str, usize>,
}

impl<'a> TypeOwnership<'a> {
    /// Build the index over `units`
    ///
    /// # Example
    ///
    /// ```text
    /// Units:
    ///   - a (provides: a, Marker)
    ///   - b (provides: b, Marker)
    ///
    /// Index:
    ///   "a" → 0
    ///   "b" → 1
    ///   ("Marker" is ambiguous and absent)
    /// ```
    pub fn build(units: &'a [Unit]) -> Self {
        let mut owners = HashMap::new();
        let mut ambiguous = HashSet::new();

        for (index, unit) in units.iter().enumerate() {
            for provided in unit.provided_types() {
                if let Some(previous) = owners.insert(provided.as_str(), index) {
                    if previous != index {
                        ambiguous.insert(provided.as_str());
                    }
                }
            }
        }

        for type_name in &ambiguous {
            tracing::debug!(
                "Type \"{}\" is provided by more than one unit, imports through it are ignored",
                type_name
            );
            owners.remove(type_name);
        }

        Self { owners }
    }

    /// Position of the unit owning `type_name`, if exactly one unit does
    pub fn owner_of(&self, type_name: &str) -> Option<usize> {
        self.owners.get(type_name).copied()
    }
}
