//! Command implementations for precedence CLI

pub mod completions;
pub mod helpers;
pub mod lookup;
pub mod order;
pub mod reorder;
