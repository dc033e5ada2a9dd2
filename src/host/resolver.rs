//! Resource resolution
//!
//! Turns a unit's raw property source declaration into concrete
//! [`Resource`]s: placeholders in locations are substituted and every
//! resource gets the name it is registered under in the live collection.
//!
//! ## Placeholders
//!
//! - `${key}`: value of `key`, an error when undefined
//! - `${key:default}`: value of `key`, or `default` when undefined
//!
//! Values are looked up in the manifest `properties` first, then in the
//! process environment. Keys, defaults and resolved values may contain
//! placeholders themselves, so `${${env}.dir}` looks up `prod.dir` when `env`
//! is `prod`.

use indexmap::IndexMap;

use crate::config::{Manifest, PropertySourceDeclaration};
use crate::domain::Resource;
use crate::error::{Result, resource};

const PLACEHOLDER_PREFIX: &str = "${";
const PLACEHOLDER_SUFFIX: char = '}';
const VALUE_SEPARATOR: char = ':';

/// Resolves property source declarations into resources
pub trait ResourceResolver {
    /// Resources of one declaration, in location order
    ///
    /// # Errors
    ///
    /// Returns an error if a location cannot be resolved.
    fn resolve(&self, declaration: &PropertySourceDeclaration) -> Result<Vec<Resource>>;
}

/// Human-readable description of a resolved location
///
/// This is the default resource name, and matches how loaded resources are
/// named in the live collection.
///
/// # Example
///
/// ```text
/// classpath:/config.properties   → class path resource [config.properties]
/// config.properties              → class path resource [config.properties]
/// file:/etc/app.properties       → URL [file:/etc/app.properties]
/// https://host/app.properties    → URL [https://host/app.properties]
/// ```
pub fn describe_location(location: &str) -> String {
    if let Some(path) = location.strip_prefix("classpath:") {
        format!("class path resource [{}]", path.trim_start_matches('/'))
    } else if location.starts_with("file:") || location.contains("://") {
        format!("URL [{location}]")
    } else {
        format!("class path resource [{}]", location.trim_start_matches('/'))
    }
}

/// Resolver substituting `${...}` placeholders
#[derive(Debug, Clone)]
pub struct PlaceholderResolver {
    properties: IndexMap<String, String>,
    use_environment: bool,
}

impl Default for PlaceholderResolver {
    fn default() -> Self {
        Self::new(IndexMap::new())
    }
}

impl PlaceholderResolver {
    pub fn new(properties: IndexMap<String, String>) -> Self {
        Self {
            properties,
            use_environment: true,
        }
    }

    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(manifest.properties.clone())
    }

    /// Stop falling back to environment variables
    #[must_use]
    pub fn without_environment(mut self) -> Self {
        self.use_environment = false;
        self
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned().or_else(|| {
            if self.use_environment {
                std::env::var(key).ok()
            } else {
                None
            }
        })
    }

    /// Substitute every placeholder in `location`
    ///
    /// # Errors
    ///
    /// Returns an error for an undefined placeholder without default, or one
    /// whose value refers back to itself.
    pub fn resolve_placeholders(&self, location: &str) -> Result<String> {
        let mut visiting = Vec::new();
        self.substitute(location, location, &mut visiting)
    }

    fn substitute(&self, text: &str, location: &str, visiting: &mut Vec<String>) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            result.push_str(&rest[..start]);
            let after = &rest[start + PLACEHOLDER_PREFIX.len()..];

            // Unterminated placeholders stay as written
            let Some(end) = find_top_level(after, PLACEHOLDER_SUFFIX) else {
                result.push_str(&rest[start..]);
                return Ok(result);
            };

            let expression = &after[..end];
            let (key, default) = match find_top_level(expression, VALUE_SEPARATOR) {
                Some(separator) => (&expression[..separator], Some(&expression[separator + 1..])),
                None => (expression, None),
            };
            let key = self.substitute(key, location, visiting)?;
            result.push_str(&self.resolve_key(&key, default, location, visiting)?);
            rest = &after[end + 1..];
        }

        result.push_str(rest);
        Ok(result)
    }

    fn resolve_key(
        &self,
        key: &str,
        default: Option<&str>,
        location: &str,
        visiting: &mut Vec<String>,
    ) -> Result<String> {
        if visiting.iter().any(|k| k == key) {
            return Err(resource::unresolvable_placeholder(key, location));
        }

        match self.lookup(key) {
            Some(value) => {
                visiting.push(key.to_string());
                let resolved = self.substitute(&value, location, visiting);
                visiting.pop();
                resolved
            }
            None => match default {
                Some(default) => self.substitute(default, location, visiting),
                None => Err(resource::unresolvable_placeholder(key, location)),
            },
        }
    }
}

/// Index of the first `needle` outside any nested `${...}`
///
/// With `}` as needle this finds the end of a placeholder whose `${` was
/// already consumed.
fn find_top_level(text: &str, needle: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut index = 0;
    while index < text.len() {
        if text[index..].starts_with(PLACEHOLDER_PREFIX) {
            depth += 1;
            index += PLACEHOLDER_PREFIX.len();
            continue;
        }
        if depth == 0 && text[index..].starts_with(needle) {
            return Some(index);
        }
        if depth > 0 && text[index..].starts_with(PLACEHOLDER_SUFFIX) {
            depth -= 1;
        }
        index += text[index..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

impl ResourceResolver for PlaceholderResolver {
    fn resolve(&self, declaration: &PropertySourceDeclaration) -> Result<Vec<Resource>> {
        declaration
            .locations
            .iter()
            .map(|location| {
                let resolved = self.resolve_placeholders(location)?;
                if resolved.trim().is_empty() {
                    return Err(resource::invalid(format!(
                        "location '{location}' resolves to an empty string"
                    )));
                }
                let name = declaration
                    .explicit_name()
                    .map_or_else(|| describe_location(&resolved), str::to_string);
                Ok(Resource::new(resolved, name, location.as_str()))
            })
            .collect()
    }
}
