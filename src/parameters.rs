//! Named parameters handed from content providers to the renderers.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// Mapping from parameter name to its string value.
///
/// Entries keep their insertion order so that rendering and logging are
/// deterministic, but no rendering semantics depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet(IndexMap<String, String>);

impl ParameterSet {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts or replaces a parameter.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.0.insert(name.into(), value.into());
    }

    /// Inserts every pair from `other`, replacing existing names.
    pub fn insert_all<'a, I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, value) in other {
            self.insert(name.as_str(), value.as_str());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Looks up a parameter that must be present.
    ///
    /// # Errors
    /// * `Error::MissingParameter` if `name` is not set
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| Error::MissingParameter { name: name.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// A provider's output: the parameters plus the name of the main content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub content_tag: String,
    pub parameters: ParameterSet,
}

impl Content {
    pub fn new<S: Into<String>>(content_tag: S, parameters: ParameterSet) -> Self {
        Self { content_tag: content_tag.into(), parameters }
    }
}
