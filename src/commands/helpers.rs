//! Command helper utilities

use std::path::Path;

use precedence::config::Manifest;
use precedence::error::Result;
use precedence::host::{PlaceholderResolver, PrecedencePostProcessor, UnitDiscovery};

/// Load the manifest named on the command line
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    tracing::debug!("Loading manifest from {}", path.display());
    Manifest::load(path)
}

/// Discovery over `manifest` with placeholder resolution attached
///
/// Environment variables are consulted after the manifest properties unless
/// `no_env` is set.
pub fn discovery(manifest: &Manifest, no_env: bool) -> UnitDiscovery<'_> {
    let resolver = PlaceholderResolver::from_manifest(manifest);
    let resolver = if no_env {
        resolver.without_environment()
    } else {
        resolver
    };
    UnitDiscovery::new(manifest).with_resolver(resolver)
}

pub fn post_processor(manifest: &Manifest, no_env: bool) -> PrecedencePostProcessor<'_> {
    PrecedencePostProcessor::new(discovery(manifest, no_env))
}
