//! Dependency graph over configuration units
//!
//! One node per unit, stored at the unit's position in the (sorted) input.
//! A node's children are the units it imports, in import declaration order.
//!
//! ## Graph Structure
//!
//! ```text
//! nodes: Vec<DependencyNode>
//!          ↓
//!   [0] App   → children [1, 2]
//!   [1] Cfg5  → children [3]
//!   [2] Cfg6  → children []
//!   [3] Cfg4  → children []
//! ```
//!
//! The graph may contain cycles; nothing here walks it.

use crate::analyzer::ownership::TypeOwnership;
use crate::domain::Unit;

/// Graph node wrapping a unit
#[derive(Debug, Clone)]
pub struct DependencyNode {
    unit: usize,
    children: Vec<usize>,
}

impl DependencyNode {
    fn new(unit: usize) -> Self {
        Self {
            unit,
            children: Vec::new(),
        }
    }

    fn add_child(&mut self, node: usize) {
        self.children.push(node);
    }

    /// Position of the wrapped unit
    pub fn unit(&self) -> usize {
        self.unit
    }

    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// Import graph built from unit declarations
#[derive(Debug)]
pub struct DependencyGraph<'a> {
    units: &'a [Unit],
    nodes: Vec<DependencyNode>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph, resolving each import through the ownership index
    ///
    /// Imports of unknown or ambiguous types are skipped.
    pub fn build(units: &'a [Unit]) -> Self {
        let ownership = TypeOwnership::build(units);
        let mut nodes: Vec<DependencyNode> = (0..units.len()).map(DependencyNode::new).collect();

        for (index, unit) in units.iter().enumerate() {
            for import in unit.direct_imports() {
                match ownership.owner_of(import.as_str()) {
                    Some(imported) => nodes[index].add_child(imported),
                    None => tracing::trace!(
                        "Import \"{}\" of {} does not resolve to a unit",
                        import,
                        unit.identity()
                    ),
                }
            }
        }

        Self { units, nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, index: usize) -> &[usize] {
        self.nodes[index].children()
    }

    pub fn unit(&self, index: usize) -> &'a Unit {
        &self.units[self.nodes[index].unit()]
    }

    /// Nodes no other node imports, in input order
    ///
    /// A node importing itself counts as imported.
    pub fn roots(&self) -> Vec<usize> {
        let mut imported = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for &child in node.children() {
                imported[child] = true;
            }
        }

        (0..self.nodes.len())
            .filter(|&index| !imported[index])
            .collect()
    }
}
