//! Reordering of the live collection into the computed resource order
//!
//! ## Algorithm
//!
//! 1. Find the source right before the first resource source; it is the
//!    initial anchor (or the start of the collection when nothing precedes)
//! 2. For every name in the target order, move the matching source right
//!    after the anchor, then make it the new anchor
//! 3. Names without a matching source are skipped
//!
//! Matched sources end up contiguous and in target order; every other source
//! keeps its relative position. Running it twice changes nothing the second
//! time.
//!
//! ```text
//! Live:    [system, core, other, app]      target: [app, core]
//! Anchor:  system
//! Result:  [system, app, core, other]
//! ```

use std::collections::HashSet;

use crate::error::Result;
use crate::precedence::sources::{Anchor, NamedCollection, NamedSource};

/// Whether any source in the collection was loaded from a resource
pub fn has_resource_sources<C: NamedCollection>(sources: &C) -> bool {
    sources.iter().any(|source| source.is_resource())
}

/// Anchor for the first move, `None` when no resource source is loaded
fn initial_anchor<C: NamedCollection>(sources: &C) -> Option<Anchor> {
    let mut previous: Option<&str> = None;
    for source in sources.iter() {
        if source.is_resource() {
            return Some(previous.map_or(Anchor::Start, |name| Anchor::After(name.to_string())));
        }
        previous = Some(source.name());
    }
    None
}

/// Move the sources named in `target_order` into that order, in place
///
/// Only the first occurrence of a repeated name is used. Each move goes
/// through [`NamedCollection::insert_after`], which replaces the source of
/// the same name, so a rejected move leaves the source where it was.
///
/// # Errors
///
/// Returns an error if the collection rejects a move.
pub fn reorder_resources<C, S>(sources: &mut C, target_order: &[S]) -> Result<()>
where
    C: NamedCollection,
    C::Source: Clone,
    S: AsRef<str>,
{
    let Some(mut anchor) = initial_anchor(&*sources) else {
        tracing::debug!("No resource property sources are loaded, nothing to reorder");
        return Ok(());
    };

    let mut seen = HashSet::with_capacity(target_order.len());
    for name in target_order {
        let name = name.as_ref();
        if !seen.insert(name) {
            tracing::trace!("Ignoring repeated \"{}\" in target order", name);
            continue;
        }

        if anchor.is(name) {
            continue;
        }

        let Some(source) = sources.get(name).cloned() else {
            tracing::debug!(
                "Skipping \"{}\", because it was not loaded into the current collection",
                name
            );
            continue;
        };

        tracing::info!("Moving \"{}\" after {}", name, anchor);
        sources.insert_after(&anchor, source)?;
        anchor = Anchor::After(name.to_string());
    }

    Ok(())
}
