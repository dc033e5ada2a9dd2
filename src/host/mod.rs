//! Host-side collaborators of the ordering core
//!
//! The core receives finished [`Unit`](crate::domain::Unit)s and a live
//! collection. This module produces them from a [`Manifest`](crate::config::Manifest):
//! - [`hierarchy`]: provided types (self plus transitive supertypes)
//! - [`resolver`]: placeholder resolution and resource naming
//! - [`discovery`]: manifest units to domain units
//! - [`processor`]: runs ordering and reordering in one pass

pub mod discovery;
pub mod hierarchy;
pub mod processor;
pub mod resolver;

pub use discovery::UnitDiscovery;
pub use hierarchy::TypeHierarchy;
pub use processor::PrecedencePostProcessor;
pub use resolver::{PlaceholderResolver, ResourceResolver, describe_location};
