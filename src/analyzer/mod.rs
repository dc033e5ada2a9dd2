//! Import-aware ordering of configuration units
//!
//! Builds a dependency graph from the units' import declarations and
//! linearizes it root by root, so that within one root's reach every unit
//! precedes the units it imports. A unit shared by several roots goes with
//! the first root reaching it. The
//! flattened resource order derived from it is what the
//! [`precedence`](crate::precedence) engine applies to the live collection.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use precedence::analyzer::ConfigurationsAnalyzer;
//!
//! let analyzer = ConfigurationsAnalyzer::new(&units);
//! for unit in analyzer.sorted_units() {
//!     println!("{}", unit.identity());
//! }
//! let names = analyzer.resource_names();
//! ```

pub mod graph;
pub mod ownership;
pub mod traversal;

use crate::analyzer::graph::DependencyGraph;
use crate::analyzer::traversal::BreadthFirst;
use crate::domain::{Resource, Unit};

/// Stable sort by identity, removing any dependence on discovery order
pub fn sort_units(units: &[Unit]) -> Vec<Unit> {
    let mut sorted = units.to_vec();
    sorted.sort_by(|a, b| a.identity().cmp(b.identity()));
    sorted
}

/// Order units so that importing units precede the units they import
///
/// Deterministic for a given set of units regardless of input order. Every
/// unit appears exactly once, cycles included.
///
/// # Example
///
/// ```text
/// Units:
///   App   imports [Cfg5, Cfg6]
///   Cfg5  imports [Core]
///   Cfg6  imports [Core]
///   Core
///
/// Result: [App, Cfg5, Cfg6, Core]
/// ```
pub fn compute_unit_order(units: &[Unit]) -> Vec<Unit> {
    let sorted = sort_units(units);
    let graph = DependencyGraph::build(&sorted);

    BreadthFirst::new(&graph)
        .map(|node| graph.unit(node).clone())
        .collect()
}

/// Every unit's resources concatenated in unit order
pub fn flatten_resources(ordered_units: &[Unit]) -> Vec<Resource> {
    ordered_units
        .iter()
        .flat_map(|unit| unit.resources().iter().cloned())
        .collect()
}

/// Global resource priority order, highest priority first
pub fn resource_order(units: &[Unit]) -> Vec<Resource> {
    flatten_resources(&compute_unit_order(units))
}

/// Ordering computed once over a set of units
#[derive(Debug, Clone)]
pub struct ConfigurationsAnalyzer {
    sorted_units: Vec<Unit>,
}

impl ConfigurationsAnalyzer {
    pub fn new(units: &[Unit]) -> Self {
        Self {
            sorted_units: compute_unit_order(units),
        }
    }

    pub fn sorted_units(&self) -> &[Unit] {
        &self.sorted_units
    }

    pub fn resource_order(&self) -> Vec<Resource> {
        flatten_resources(&self.sorted_units)
    }

    pub fn resource_names(&self) -> Vec<String> {
        self.sorted_units
            .iter()
            .flat_map(|unit| unit.resources().iter().map(|r| r.name.clone()))
            .collect()
    }
}
