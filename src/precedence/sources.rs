//! Live property source collection
//!
//! [`NamedCollection`] is the abstraction the reordering engine works on;
//! [`PropertySources`] is the in-memory implementation backed by an
//! `IndexMap`, which keeps the name → position index current on every move.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, sources as source_error};

/// Where a property source came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Loaded from an externally resolved resource
    #[default]
    Resource,
    /// Registered programmatically (system properties, environment, ...)
    Programmatic,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Resource => write!(f, "resource"),
            SourceKind::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// Element of the live collection that the reordering engine can inspect
pub trait NamedSource {
    fn name(&self) -> &str;

    /// Whether the element was loaded from an externally resolved resource
    fn is_resource(&self) -> bool;
}

/// Position after which a source is inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Before every other source
    Start,
    /// Right after the named source
    After(String),
}

impl Anchor {
    pub fn is(&self, name: &str) -> bool {
        matches!(self, Anchor::After(anchor) if anchor == name)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => write!(f, "the start"),
            Anchor::After(name) => write!(f, "\"{name}\""),
        }
    }
}

/// Ordered, name-addressable collection of sources
pub trait NamedCollection {
    type Source: NamedSource;

    /// Sources in priority order
    fn iter(&self) -> impl Iterator<Item = &Self::Source>;

    fn get(&self, name: &str) -> Option<&Self::Source>;

    fn index_of(&self, name: &str) -> Option<usize>;

    /// Insert `source` right after `anchor`, replacing any source of the
    /// same name
    ///
    /// # Errors
    ///
    /// Returns an error if the anchor is missing or names `source` itself.
    fn insert_after(&mut self, anchor: &Anchor, source: Self::Source) -> Result<()>;
}

/// A named set of properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySource {
    pub name: String,

    #[serde(default)]
    pub kind: SourceKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(
        default,
        deserialize_with = "crate::config::serialization::scalar_map",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub properties: IndexMap<String, String>,
}

impl PropertySource {
    pub fn resource(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Resource,
            origin: None,
            properties: IndexMap::new(),
        }
    }

    pub fn programmatic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Programmatic,
            origin: None,
            properties: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

impl NamedSource for PropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_resource(&self) -> bool {
        self.kind == SourceKind::Resource
    }
}

/// The live property source collection, highest priority first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySources {
    inner: IndexMap<String, PropertySource>,
}

impl PropertySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from sources in priority order
    ///
    /// # Errors
    ///
    /// Returns an error if two sources share a name.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = PropertySource>,
    {
        let mut collection = Self::new();
        for source in sources {
            collection.add_last(source)?;
        }
        Ok(collection)
    }

    /// Append a source with the lowest priority
    ///
    /// # Errors
    ///
    /// Returns an error if a source with the same name exists.
    pub fn add_last(&mut self, source: PropertySource) -> Result<()> {
        if self.inner.contains_key(&source.name) {
            return Err(source_error::duplicate(source.name));
        }
        self.inner.insert(source.name.clone(), source);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.inner.keys().map(String::as_str).collect()
    }

    /// Effective value of `key`: the first source defining it wins
    ///
    /// Returns the winning source's name alongside the value.
    pub fn get_property(&self, key: &str) -> Option<(&str, &str)> {
        self.inner
            .values()
            .find_map(|source| source.property(key).map(|value| (source.name.as_str(), value)))
    }
}

impl NamedCollection for PropertySources {
    type Source = PropertySource;

    fn iter(&self) -> impl Iterator<Item = &PropertySource> {
        self.inner.values()
    }

    fn get(&self, name: &str) -> Option<&PropertySource> {
        self.inner.get(name)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.inner.get_index_of(name)
    }

    fn insert_after(&mut self, anchor: &Anchor, source: PropertySource) -> Result<()> {
        if let Anchor::After(anchor_name) = anchor {
            if *anchor_name == source.name {
                return Err(source_error::relative_to_itself(source.name));
            }
            if !self.inner.contains_key(anchor_name) {
                return Err(source_error::not_found(anchor_name.clone()));
            }
        }

        self.inner.shift_remove(&source.name);
        let index = match anchor {
            Anchor::Start => 0,
            Anchor::After(anchor_name) => self
                .inner
                .get_index_of(anchor_name)
                .ok_or_else(|| source_error::not_found(anchor_name.clone()))?
                + 1,
        };
        self.inner.shift_insert(index, source.name.clone(), source);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PropertySources {
    type Item = &'a PropertySource;
    type IntoIter = indexmap::map::Values<'a, String, PropertySource>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::PrecedenceError;

    fn collection(names: &[&str]) -> PropertySources {
        PropertySources::from_sources(names.iter().map(|n| PropertySource::resource(*n)))
            .expect("names should be unique")
    }

    #[test]
    fn test_from_sources_rejects_duplicates() {
        let result = PropertySources::from_sources([
            PropertySource::resource("a"),
            PropertySource::programmatic("a"),
        ]);
        assert!(matches!(result, Err(PrecedenceError::DuplicateSource { .. })));
    }

    #[test]
    fn test_insert_after_moves_existing_source() {
        let mut sources = collection(&["a", "b", "c", "d"]);
        let d = sources.get("d").cloned().expect("d should exist");

        sources
            .insert_after(&Anchor::After("a".to_string()), d)
            .expect("insert should succeed");

        assert_eq!(sources.names(), vec!["a", "d", "b", "c"]);
        assert_eq!(sources.index_of("d"), Some(1));
        assert_eq!(sources.index_of("c"), Some(3));
    }

    #[test]
    fn test_insert_after_replaces_same_name() {
        let mut sources = collection(&["a", "b", "c"]);
        let replacement = PropertySource::resource("c").with_property("k", "v");

        sources
            .insert_after(&Anchor::Start, replacement)
            .expect("insert should succeed");

        assert_eq!(sources.names(), vec!["c", "a", "b"]);
        assert_eq!(sources.get_property("k"), Some(("c", "v")));
    }

    #[test]
    fn test_insert_after_itself_is_rejected() {
        let mut sources = collection(&["a", "b"]);
        let result = sources.insert_after(&Anchor::After("a".to_string()), PropertySource::resource("a"));

        assert!(matches!(result, Err(PrecedenceError::InvalidRelativeSource { .. })));
        assert_eq!(sources.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_after_missing_anchor_keeps_source() {
        let mut sources = collection(&["a", "b"]);
        let result = sources.insert_after(
            &Anchor::After("missing".to_string()),
            PropertySource::resource("b"),
        );

        assert!(matches!(result, Err(PrecedenceError::SourceNotFound { .. })));
        assert_eq!(sources.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_get_property_first_source_wins() {
        let sources = PropertySources::from_sources([
            PropertySource::programmatic("system").with_property("other", "1"),
            PropertySource::resource("app").with_property("key", "app"),
            PropertySource::resource("core").with_property("key", "core"),
        ])
        .expect("names should be unique");

        assert_eq!(sources.get_property("key"), Some(("app", "app")));
        assert_eq!(sources.get_property("missing"), None);
    }

    #[test]
    fn test_source_kind_deserializes_lowercase() {
        let source: PropertySource =
            serde_yaml::from_str("name: env\nkind: programmatic\n").expect("valid YAML");
        assert_eq!(source.kind, SourceKind::Programmatic);

        let source: PropertySource = serde_yaml::from_str("name: app\n").expect("valid YAML");
        assert_eq!(source.kind, SourceKind::Resource);
    }

    #[test]
    fn test_anchor_display() {
        assert_eq!(Anchor::Start.to_string(), "the start");
        assert_eq!(Anchor::After("a".to_string()).to_string(), "\"a\"");
        assert!(Anchor::After("a".to_string()).is("a"));
        assert!(!Anchor::Start.is("a"));
    }
}
