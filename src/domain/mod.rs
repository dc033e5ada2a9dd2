//! Domain models for precedence
//!
//! This module contains pure domain objects: configuration units and the
//! resources they contribute. They carry no knowledge of how they were
//! discovered or where the resources were loaded from.

pub mod resource;
pub mod unit;

pub use resource::{Resource, ResourceHandle};
pub use unit::{TypeName, Unit, UnitBuilder};
