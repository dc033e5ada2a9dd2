//! Precedence of loaded property sources
//!
//! The live collection is an ordered, name-addressable list of property
//! sources; earlier sources win lookups. [`reorder_resources`] relocates the
//! externally-resolved ones into the order computed by the
//! [`analyzer`](crate::analyzer).

pub mod reorder;
pub mod sources;

pub use reorder::{has_resource_sources, reorder_resources};
pub use sources::{Anchor, NamedCollection, NamedSource, PropertySource, PropertySources, SourceKind};
