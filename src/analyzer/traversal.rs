//! Breadth-first linearization of the dependency graph
//!
//! ## Algorithm
//!
//! 1. Start a traversal from every root, in input order
//! 2. Each traversal visits its start, then children level by level, in
//!    child list order
//! 3. One visited set spans all traversals: a node reachable from two roots
//!    is emitted when the first traversal reaches it and skipped afterwards
//! 4. Nodes never reached from a root (a cycle nobody outside imports) are
//!    then used as starts themselves, in input order
//!
//! The visited set is also what guarantees termination on cyclic graphs.

use std::collections::VecDeque;

use crate::analyzer::graph::DependencyGraph;

/// Finite iterator over graph nodes in root-major breadth-first order
pub struct BreadthFirst<'g, 'a> {
    graph: &'g DependencyGraph<'a>,
    starts: std::vec::IntoIter<usize>,
    queue: VecDeque<usize>,
    visited: Vec<bool>,
}

impl<'g, 'a> BreadthFirst<'g, 'a> {
    pub fn new(graph: &'g DependencyGraph<'a>) -> Self {
        let mut starts = graph.roots();
        starts.extend(0..graph.len());

        Self {
            graph,
            starts: starts.into_iter(),
            queue: VecDeque::new(),
            visited: vec![false; graph.len()],
        }
    }

    fn visit(&mut self, node: usize) {
        if !self.visited[node] {
            self.visited[node] = true;
            self.queue.push_back(node);
        }
    }
}

impl Iterator for BreadthFirst<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(node) = self.queue.pop_front() {
                for &child in self.graph.children(node) {
                    self.visit(child);
                }
                return Some(node);
            }

            let start = self.starts.next()?;
            self.visit(start);
        }
    }
}
