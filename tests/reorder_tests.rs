//! Reordering tests against live collections
//!
//! Runs the post-processor over manifest fixtures and drives the engine
//! through a second `NamedCollection` implementation.

#![allow(clippy::expect_used)]

mod common;

use std::collections::BTreeSet;

use precedence::config::Manifest;
use precedence::error::Result;
use precedence::host::{PlaceholderResolver, PrecedencePostProcessor, UnitDiscovery};
use precedence::precedence::{
    Anchor, NamedCollection, NamedSource, PropertySources, reorder_resources,
};

fn process(manifest: &Manifest, sources: &mut PropertySources) -> bool {
    let discovery = UnitDiscovery::new(manifest)
        .with_resolver(PlaceholderResolver::from_manifest(manifest).without_environment());
    PrecedencePostProcessor::new(discovery)
        .process(sources)
        .expect("processing should succeed")
        .is_some()
}

const LAYERED_AFTER: [&str; 10] = [
    "systemProperties",
    "r5",
    "r62",
    "r61",
    "r72",
    "r71",
    "app",
    "r1",
    "r3",
    "unrelated",
];

#[test]
fn test_layered_sources_reordered() {
    let manifest = common::fixture_manifest("layered");
    let mut sources = manifest.live_sources().expect("sources should be unique");

    assert!(process(&manifest, &mut sources));
    assert_eq!(sources.names(), LAYERED_AFTER);
}

#[test]
fn test_layered_lookup_prefers_most_specific_unit() {
    let manifest = common::fixture_manifest("layered");
    let mut sources = manifest.live_sources().expect("sources should be unique");
    assert_eq!(sources.get_property("layer"), Some(("r3", "core3")));

    process(&manifest, &mut sources);

    assert_eq!(sources.get_property("layer"), Some(("r5", "cfg5")));
    assert_eq!(sources.get_property("core.only"), Some(("r1", "from-core1")));
    assert_eq!(sources.get_property("unrelated.only"), Some(("unrelated", "kept")));
    assert_eq!(sources.get_property("missing"), None);
}

#[test]
fn test_reordering_twice_is_stable() {
    let manifest = common::fixture_manifest("layered");
    let mut sources = manifest.live_sources().expect("sources should be unique");

    process(&manifest, &mut sources);
    let once = sources.clone();
    process(&manifest, &mut sources);

    assert_eq!(sources.names(), once.names());
}

#[test]
fn test_reordering_keeps_every_source() {
    let manifest = common::fixture_manifest("layered");
    let original = manifest.live_sources().expect("sources should be unique");
    let mut sources = original.clone();

    process(&manifest, &mut sources);

    let before: BTreeSet<&str> = original.names().into_iter().collect();
    let after: BTreeSet<&str> = sources.names().into_iter().collect();
    assert_eq!(before, after);
    assert_eq!(sources.len(), original.len());
    for source in &original {
        assert_eq!(sources.get(&source.name), Some(source));
    }
}

#[test]
fn test_resources_not_loaded_are_skipped() {
    let manifest = Manifest::from_yaml(
        r#"
units:
  - name: org.app.App
    imports: [org.core.Core]
    property_sources:
      - locations: ["classpath:app.properties", "classpath:optional.properties"]
  - name: org.core.Core
    property_sources:
      - locations: ["classpath:core.properties"]
sources:
  - name: "class path resource [core.properties]"
  - name: environment
    kind: programmatic
  - name: "class path resource [app.properties]"
"#,
    )
    .expect("manifest should parse");
    let mut sources = manifest.live_sources().expect("sources should be unique");

    assert!(process(&manifest, &mut sources));
    assert_eq!(
        sources.names(),
        vec![
            "class path resource [app.properties]",
            "class path resource [core.properties]",
            "environment",
        ]
    );
}

#[test]
fn test_programmatic_only_collection_untouched() {
    let manifest = Manifest::from_yaml(
        r#"
units:
  - name: org.app.App
    property_sources:
      - locations: ["classpath:app.properties"]
sources:
  - name: b
    kind: programmatic
  - name: a
    kind: programmatic
"#,
    )
    .expect("manifest should parse");
    let mut sources = manifest.live_sources().expect("sources should be unique");

    assert!(!process(&manifest, &mut sources));
    assert_eq!(sources.names(), vec!["b", "a"]);
}

/// Minimal list-backed collection
#[derive(Debug, Default)]
struct Layers(Vec<Layer>);

#[derive(Debug, Clone)]
struct Layer {
    name: String,
    resource: bool,
}

impl NamedSource for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_resource(&self) -> bool {
        self.resource
    }
}

impl NamedCollection for Layers {
    type Source = Layer;

    fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.0.iter()
    }

    fn get(&self, name: &str) -> Option<&Layer> {
        self.0.iter().find(|layer| layer.name == name)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|layer| layer.name == name)
    }

    fn insert_after(&mut self, anchor: &Anchor, source: Layer) -> Result<()> {
        if let Some(index) = self.index_of(&source.name) {
            self.0.remove(index);
        }
        let index = match anchor {
            Anchor::Start => 0,
            Anchor::After(name) => self.index_of(name).map_or(self.0.len(), |i| i + 1),
        };
        self.0.insert(index, source);
        Ok(())
    }
}

impl Layers {
    fn of(entries: &[(&str, bool)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(name, resource)| Layer {
                    name: (*name).to_string(),
                    resource: *resource,
                })
                .collect(),
        )
    }

    fn names(&self) -> Vec<&str> {
        self.0.iter().map(|layer| layer.name.as_str()).collect()
    }
}

#[test]
fn test_engine_works_on_any_named_collection() {
    let mut layers = Layers::of(&[
        ("defaults", false),
        ("core", true),
        ("extra", true),
        ("app", true),
        ("overrides", false),
    ]);

    reorder_resources(&mut layers, &["app", "missing", "core"]).expect("reorder should succeed");

    assert_eq!(
        layers.names(),
        vec!["defaults", "app", "core", "extra", "overrides"]
    );
}

#[test]
fn test_engine_on_empty_collection() {
    let mut layers = Layers::default();
    reorder_resources(&mut layers, &["app"]).expect("reorder should succeed");
    assert!(layers.names().is_empty());
}
