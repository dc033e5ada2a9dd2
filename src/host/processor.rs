//! Post-processor applying import order to the live collection
//!
//! Runs once the host has loaded its property sources: discovers units,
//! computes the resource order and reorders the collection. Does nothing
//! when no resource-backed source was loaded.

use crate::analyzer::ConfigurationsAnalyzer;
use crate::error::Result;
use crate::host::discovery::UnitDiscovery;
use crate::precedence::{NamedCollection, has_resource_sources, reorder_resources};

/// Reorders resource property sources by configuration imports
pub struct PrecedencePostProcessor<'m> {
    discovery: UnitDiscovery<'m>,
}

impl<'m> PrecedencePostProcessor<'m> {
    pub fn new(discovery: UnitDiscovery<'m>) -> Self {
        Self { discovery }
    }

    /// Reorder `sources` in place
    ///
    /// Returns the analysis that drove the reordering, or `None` when the
    /// collection holds no resource sources. Discovery failures abort before
    /// any source moves.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails or the collection rejects a move.
    pub fn process<C>(&self, sources: &mut C) -> Result<Option<ConfigurationsAnalyzer>>
    where
        C: NamedCollection,
        C::Source: Clone,
    {
        if !has_resource_sources(&*sources) {
            tracing::debug!("No resource property sources loaded, skipping reordering");
            return Ok(None);
        }

        let units = self.discovery.discover()?;
        let analyzer = ConfigurationsAnalyzer::new(&units);
        tracing::debug!(
            "Ordered {} configuration units contributing {} resources",
            analyzer.sorted_units().len(),
            analyzer.resource_order().len()
        );

        reorder_resources(sources, &analyzer.resource_names())?;
        Ok(Some(analyzer))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Manifest;
    use crate::error::PrecedenceError;
    use crate::host::resolver::PlaceholderResolver;

    const MANIFEST: &str = r#"
units:
  - name: org.app.App
    imports: [org.core.Core]
    property_sources:
      - locations: ["classpath:app.properties"]
  - name: org.core.Core
    property_sources:
      - locations: ["classpath:core.properties"]
sources:
  - name: systemProperties
    kind: programmatic
  - name: "class path resource [core.properties]"
    properties:
      greeting: core
  - name: "class path resource [app.properties]"
    properties:
      greeting: app
"#;

    fn processor(manifest: &Manifest) -> PrecedencePostProcessor<'_> {
        PrecedencePostProcessor::new(
            UnitDiscovery::new(manifest)
                .with_resolver(PlaceholderResolver::from_manifest(manifest).without_environment()),
        )
    }

    #[test]
    fn test_process_reorders_by_imports() {
        let manifest = Manifest::from_yaml(MANIFEST).expect("manifest should parse");
        let mut sources = manifest.live_sources().expect("sources should be unique");
        assert_eq!(
            sources.get_property("greeting"),
            Some(("class path resource [core.properties]", "core"))
        );

        let analyzer = processor(&manifest)
            .process(&mut sources)
            .expect("processing should succeed")
            .expect("resources are loaded");

        assert_eq!(analyzer.sorted_units().len(), 2);
        assert_eq!(
            sources.names(),
            vec![
                "systemProperties",
                "class path resource [app.properties]",
                "class path resource [core.properties]",
            ]
        );
        assert_eq!(
            sources.get_property("greeting"),
            Some(("class path resource [app.properties]", "app"))
        );
    }

    #[test]
    fn test_process_without_resources_skips_discovery() {
        // Discovery would fail on the duplicate unit, proving it never runs
        let manifest = Manifest::from_yaml(
            "units:\n  - name: a\n  - name: a\nsources:\n  - name: env\n    kind: programmatic\n",
        )
        .expect("manifest should parse");
        let mut sources = manifest.live_sources().expect("sources should be unique");

        let result = processor(&manifest)
            .process(&mut sources)
            .expect("fast path should succeed");
        assert!(result.is_none());
        assert_eq!(sources.names(), vec!["env"]);
    }

    #[test]
    fn test_discovery_failure_leaves_sources_untouched() {
        let manifest = Manifest::from_yaml(
            "units:\n  - name: a\n  - name: a\nsources:\n  - name: y\n  - name: x\n",
        )
        .expect("manifest should parse");
        let mut sources = manifest.live_sources().expect("sources should be unique");

        let result = processor(&manifest).process(&mut sources);
        assert!(matches!(result, Err(PrecedenceError::DuplicateUnit { .. })));
        assert_eq!(sources.names(), vec!["y", "x"]);
    }
}
