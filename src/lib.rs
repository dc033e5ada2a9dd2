//! Precedence - import-aware ordering of configuration property sources
//!
//! Configuration units import each other and contribute external property
//! sources. This crate orders the units breadth-first from the units nobody
//! imports, so an importing unit comes before what it imports, and reorders an already-loaded collection of
//! property sources accordingly: values from the more specific unit win.
//!
//! - [`analyzer`]: dependency graph and total unit order
//! - [`precedence`]: the live collection and the reordering engine
//! - [`host`]: discovery of units from a [`config::Manifest`]
//! - [`domain`]: units and resources

pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod precedence;

pub use analyzer::{ConfigurationsAnalyzer, compute_unit_order, resource_order};
pub use error::{PrecedenceError, Result};
pub use precedence::reorder_resources;
